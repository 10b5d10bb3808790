//! Finale section - the closing letter.

use dioxus::prelude::*;
use keepsake_core::SectionKind;

use crate::components::{FloatingParticles, RippleButton};
use crate::context::use_card;
use crate::sections::CardSection;

#[component]
pub fn FinaleSection() -> Element {
    let card = use_card();
    let engine = card.read();
    let recipient = engine.content().recipient.clone();
    let sender = engine.content().sender.clone();
    let finale = engine.content().finale.clone();
    drop(engine);

    let mut note_shown = use_signal(|| false);

    rsx! {
        CardSection { kind: SectionKind::Finale,
            FloatingParticles { count: 14, opacity: 0.5 }

            h2 { class: "section-title", "{finale.heading}" }

            div { class: "finale-lines",
                for (i, line) in finale.lines.iter().enumerate() {
                    p { key: "{i}", "{line}" }
                }
            }

            if !note_shown() {
                RippleButton {
                    class: "reveal-btn",
                    onclick: move |_| note_shown.set(true),
                    "{finale.reveal_label}"
                }
            }

            if note_shown() {
                div { class: "extra-message",
                    h3 { "{finale.closing_heading}" }
                    for (i, line) in finale.closing_lines.iter().enumerate() {
                        p { key: "{i}", "{line}" }
                    }
                    p { class: "signature", "— {sender}, to {recipient}" }
                }
            }
        }
    }
}
