//! Welcome section - the greeting that opens the card.

use dioxus::prelude::*;
use keepsake_core::SectionKind;

use crate::components::FloatingParticles;
use crate::context::use_card;
use crate::sections::CardSection;

#[component]
pub fn WelcomeSection() -> Element {
    let card = use_card();
    let engine = card.read();
    let recipient = engine.content().recipient.clone();
    let welcome = engine.content().welcome.clone();
    drop(engine);

    rsx! {
        CardSection { kind: SectionKind::Welcome,
            FloatingParticles { count: 8, opacity: 0.6 }

            h1 { class: "page-title", "{welcome.title}" }
            p { class: "recipient-line", "for {recipient} 💗" }

            div { class: "greeting",
                for (i, line) in welcome.greeting_lines.iter().enumerate() {
                    p { key: "{i}", class: "greeting-line", "{line}" }
                }
            }

            p { class: "welcome-subtitle", "{welcome.subtitle}" }
            div { class: "scroll-hint", "aria-hidden": "true", "⌄" }
        }
    }
}
