//! Navigation Dots Component
//!
//! The indicator set: one dot per section, fixed to the right edge. Exactly
//! one dot is active at all times, matching the engine's current section.

use dioxus::prelude::*;

use crate::context::{apply_transition, use_card, use_effects};

/// Indicator dot column.
///
/// Dots are real buttons, so click and Enter/Space activation both arrive
/// as click events and get keyboard focus handling for free.
#[component]
pub fn NavDots() -> Element {
    let mut card = use_card();
    let fx = use_effects();

    let engine = card.read();
    let active = engine.indicators().active();
    let dots: Vec<(usize, &'static str)> = engine
        .registry()
        .iter()
        .map(|s| (s.index, s.kind.display_name()))
        .collect();
    drop(engine);

    rsx! {
        nav { class: "nav-dots", "aria-label": "Card sections",
            for (index, label) in dots {
                button {
                    key: "{index}",
                    class: if index == active { "dot active" } else { "dot" },
                    "aria-label": "Go to {label}",
                    title: "{label}",
                    onclick: move |_| {
                        if let Some(t) = card.write().navigate_to(index) {
                            apply_transition(fx, &t);
                        }
                    },
                }
            }
        }
    }
}
