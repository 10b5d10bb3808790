//! Birthday section - the confetti one.

use dioxus::prelude::*;
use keepsake_core::SectionKind;

use crate::components::{ConfettiField, RippleButton};
use crate::context::use_card;
use crate::sections::CardSection;

#[component]
pub fn BirthdaySection() -> Element {
    let card = use_card();
    let engine = card.read();
    let recipient = engine.content().recipient.clone();
    let birthday = engine.content().birthday.clone();
    drop(engine);

    let mut wish_shown = use_signal(|| false);

    rsx! {
        CardSection { kind: SectionKind::Birthday,
            ConfettiField {}

            h2 { class: "section-title birthday-heading", "{birthday.heading}" }
            p { class: "recipient-line", "to {recipient}" }

            div { class: "birthday-lines",
                for (i, line) in birthday.lines.iter().enumerate() {
                    p { key: "{i}", class: "birthday-line", "{line}" }
                }
            }

            if !wish_shown() {
                RippleButton {
                    class: "reveal-btn",
                    onclick: move |_| wish_shown.set(true),
                    "{birthday.reveal_label}"
                }
            }

            if wish_shown() {
                div { class: "extra-message",
                    h3 { "{birthday.wish_heading}" }
                    for (i, line) in birthday.wish_lines.iter().enumerate() {
                        p { key: "{i}", "{line}" }
                    }
                }
            }
        }
    }
}
