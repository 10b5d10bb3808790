//! The card's themed sections, one component per entry in the registry.

mod apology;
mod birthday;
mod choice;
mod feelings;
mod finale;
mod importance;
mod promises;
mod surprise;
mod welcome;
mod wishes;

use dioxus::prelude::*;
use keepsake_core::{section_anchor_id, SectionKind};

use crate::context::{use_card, use_mounted_sections};

pub use apology::ApologySection;
pub use birthday::BirthdaySection;
pub use choice::ChoiceSection;
pub use feelings::FeelingsSection;
pub use finale::FinaleSection;
pub use importance::ImportanceSection;
pub use promises::PromisesSection;
pub use surprise::SurpriseSection;
pub use welcome::WelcomeSection;
pub use wishes::WishesSection;

/// The full section stack, in registry order.
#[component]
pub fn CardSections() -> Element {
    rsx! {
        WelcomeSection {}
        ApologySection {}
        FeelingsSection {}
        ImportanceSection {}
        BirthdaySection {}
        WishesSection {}
        PromisesSection {}
        ChoiceSection {}
        SurpriseSection {}
        FinaleSection {}
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CardSectionProps {
    pub kind: SectionKind,
    pub children: Element,
}

/// Shared section frame: stable anchor id, theme class, and mount
/// registration so the engine's anchor locator can find it.
#[component]
pub fn CardSection(props: CardSectionProps) -> Element {
    let card = use_card();
    let mounted = use_mounted_sections();

    let engine = card.read();
    let index = engine.registry().index_of(props.kind).unwrap_or(0);
    drop(engine);

    let label = props.kind.display_name();
    let theme = props.kind.theme_class();

    rsx! {
        section {
            id: "{section_anchor_id(index)}",
            class: "card-section {theme}",
            "aria-label": "{label}",
            onmounted: move |_| {
                mounted.write().insert(index);
            },
            div { class: "section-inner", {props.children} }
        }
    }
}
