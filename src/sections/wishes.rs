//! Wishes section - expandable wish cards.

use dioxus::prelude::*;
use keepsake_core::{SectionKind, WishItem};

use crate::components::FloatingParticles;
use crate::context::{use_card, use_effects};
use crate::sections::CardSection;

#[component]
pub fn WishesSection() -> Element {
    let card = use_card();
    let engine = card.read();
    let wishes = engine.content().wishes.clone();
    drop(engine);

    rsx! {
        CardSection { kind: SectionKind::Wishes,
            FloatingParticles {}

            h2 { class: "section-title", "My Wishes for You" }
            p { class: "section-subtitle", "Tap one to open it." }

            div { class: "wish-list",
                for (i, wish) in wishes.into_iter().enumerate() {
                    WishCard { key: "{i}", wish }
                }
            }
        }
    }
}

#[component]
fn WishCard(wish: WishItem) -> Element {
    let mut fx = use_effects();
    let mut expanded = use_signal(|| false);

    let on_click = move |e: MouseEvent| {
        let p = e.client_coordinates();
        fx.burst_at(p.x, p.y);
        let now = !expanded();
        expanded.set(now);
    };

    rsx! {
        div {
            class: if expanded() { "wish-item expanded" } else { "wish-item" },
            onclick: on_click,

            div { class: "wish-head",
                span { class: "card-icon", "aria-hidden": "true", "{wish.icon}" }
                h3 { class: "card-title", "{wish.title}" }
            }
            div { class: "wish-detail",
                p { "{wish.detail}" }
            }
        }
    }
}
