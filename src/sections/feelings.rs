//! Feelings section - what the recipient means to the sender.

use dioxus::prelude::*;
use keepsake_core::SectionKind;

use crate::components::{FloatingParticles, TapCard};
use crate::context::use_card;
use crate::sections::CardSection;

#[component]
pub fn FeelingsSection() -> Element {
    let card = use_card();
    let engine = card.read();
    let feelings = engine.content().feelings.clone();
    drop(engine);

    rsx! {
        CardSection { kind: SectionKind::Feelings,
            FloatingParticles {}

            h2 { class: "section-title", "What You Mean to Me" }
            p { class: "section-subtitle", "Tap a card. Each one has something to say." }

            div { class: "card-grid",
                for (i, feeling) in feelings.iter().enumerate() {
                    TapCard {
                        key: "{i}",
                        icon: "{feeling.icon}",
                        title: "{feeling.title}",
                        body: "{feeling.body}",
                        message: "{feeling.message}",
                        class: "feeling-card",
                    }
                }
            }
        }
    }
}
