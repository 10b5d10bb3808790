//! Promises section - a vertical timeline of commitments.

use dioxus::prelude::*;
use keepsake_core::SectionKind;

use crate::components::FloatingParticles;
use crate::context::use_card;
use crate::sections::CardSection;

#[component]
pub fn PromisesSection() -> Element {
    let card = use_card();
    let engine = card.read();
    let promises = engine.content().promises.clone();
    drop(engine);

    rsx! {
        CardSection { kind: SectionKind::Promises,
            FloatingParticles {}

            h2 { class: "section-title", "My Promises" }

            div { class: "promise-timeline",
                for (i, promise) in promises.iter().enumerate() {
                    div { key: "{i}", class: "promise-item",
                        span { class: "promise-marker", "aria-hidden": "true" }
                        div { class: "promise-body",
                            h3 { class: "card-title", "{promise.title}" }
                            p { class: "card-body", "{promise.body}" }
                        }
                    }
                }
            }
        }
    }
}
