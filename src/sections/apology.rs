//! Apology section - typewriter lines and an extra note revealed on demand.

use dioxus::prelude::*;
use keepsake_core::SectionKind;

use crate::components::{FloatingParticles, RippleButton, Typewriter};
use crate::context::use_card;
use crate::sections::CardSection;

/// Gap between one line starting to type and the next.
const LINE_STAGGER_MS: u64 = 2000;

#[component]
pub fn ApologySection() -> Element {
    let card = use_card();
    let engine = card.read();
    let apology = engine.content().apology.clone();
    drop(engine);

    let mut extra_shown = use_signal(|| false);

    rsx! {
        CardSection { kind: SectionKind::Apology,
            FloatingParticles {}

            h2 { class: "section-title", "{apology.heading}" }

            div { class: "typed-lines",
                for (i, line) in apology.typed_lines.iter().enumerate() {
                    Typewriter {
                        key: "{i}",
                        text: "{line}",
                        start_delay_ms: i as u64 * LINE_STAGGER_MS,
                        replayable: true,
                    }
                }
            }

            if !extra_shown() {
                RippleButton {
                    class: "reveal-btn",
                    onclick: move |_| extra_shown.set(true),
                    "{apology.reveal_label}"
                }
            }

            if extra_shown() {
                div { class: "extra-message",
                    h3 { "{apology.extra_heading}" }
                    for (i, line) in apology.extra_lines.iter().enumerate() {
                        p { key: "{i}", "{line}" }
                    }
                }
            }
        }
    }
}
