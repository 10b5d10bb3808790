//! Choice section - the card's one real interaction.
//!
//! The section renders straight off the engine's choice machine; the timer
//! chain lives here, with every step re-checking its ticket so a re-entry
//! reset cancels whatever is still pending.

use dioxus::prelude::*;
use keepsake_core::{
    ChoiceOption, ChoicePhase, SectionKind, AUTO_ADVANCE_DELAY, HOLD_DELAY, RESPONSE_DELAY,
};

use crate::components::{FloatingParticles, RippleButton};
use crate::context::{apply_transition, use_card, use_effects};
use crate::sections::CardSection;

#[component]
pub fn ChoiceSection() -> Element {
    let mut card = use_card();
    let fx = use_effects();

    let engine = card.read();
    let choice = engine.content().choice.clone();
    let phase = engine.choice().phase();
    let enabled = engine.choice().buttons_enabled();
    drop(engine);

    let mut select = move |option: ChoiceOption| {
        // rejected unless Idle; buttons disable in this same step
        let Some(ticket) = card.write().select_choice(option) else {
            return;
        };

        spawn(async move {
            tokio::time::sleep(RESPONSE_DELAY).await;
            if !card.write().reveal_choice(ticket) {
                return; // reset while waiting
            }

            tokio::time::sleep(HOLD_DELAY).await;
            if !card.peek().should_auto_advance(ticket) {
                return; // reset, or already at the last section
            }

            tokio::time::sleep(AUTO_ADVANCE_DELAY).await;
            if let Some(t) = card.write().choice_auto_advance(ticket) {
                apply_transition(fx, &t);
            }
        });
    };

    let response: Vec<String> = match phase {
        ChoicePhase::Shown(option) => choice.response_for(option).to_vec(),
        _ => Vec::new(),
    };

    rsx! {
        CardSection { kind: SectionKind::Choice,
            FloatingParticles { count: 10 }

            h2 { class: "section-title", "{choice.prompt}" }
            p { class: "section-subtitle", "{choice.subtitle}" }

            div { class: "choice-buttons",
                RippleButton {
                    class: "choice-btn choice-forgive",
                    disabled: !enabled,
                    onclick: move |_| select(ChoiceOption::Forgive),
                    "{choice.forgive_label}"
                }
                RippleButton {
                    class: "choice-btn choice-need-time",
                    disabled: !enabled,
                    onclick: move |_| select(ChoiceOption::NeedTime),
                    "{choice.need_time_label}"
                }
            }

            if !response.is_empty() {
                div { class: "choice-response",
                    for (i, line) in response.iter().enumerate() {
                        p { key: "{i}", "{line}" }
                    }
                }
            }
        }
    }
}
