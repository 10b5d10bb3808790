//! Surprise section - the sparkle one.

use dioxus::prelude::*;
use keepsake_core::SectionKind;

use crate::components::SparkleVeil;
use crate::context::use_card;
use crate::sections::CardSection;

#[component]
pub fn SurpriseSection() -> Element {
    let card = use_card();
    let engine = card.read();
    let surprise = engine.content().surprise.clone();
    drop(engine);

    rsx! {
        CardSection { kind: SectionKind::Surprise,
            SparkleVeil {}

            h2 { class: "section-title", "{surprise.heading}" }

            div { class: "surprise-lines",
                for (i, line) in surprise.lines.iter().enumerate() {
                    p { key: "{i}", class: "surprise-line", "{line}" }
                }
            }
        }
    }
}
