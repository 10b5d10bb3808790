//! Importance section - why the recipient matters.

use dioxus::prelude::*;
use keepsake_core::SectionKind;

use crate::components::{FloatingParticles, TapCard};
use crate::context::use_card;
use crate::sections::CardSection;

#[component]
pub fn ImportanceSection() -> Element {
    let card = use_card();
    let engine = card.read();
    let importance = engine.content().importance.clone();
    drop(engine);

    rsx! {
        CardSection { kind: SectionKind::Importance,
            FloatingParticles {}

            h2 { class: "section-title", "Why You Matter" }

            div { class: "importance-list",
                for (i, item) in importance.iter().enumerate() {
                    TapCard {
                        key: "{i}",
                        icon: "{item.icon}",
                        title: "{item.title}",
                        body: "{item.body}",
                        message: "{item.message}",
                        class: "importance-item",
                    }
                }
            }
        }
    }
}
