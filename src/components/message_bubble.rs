//! Tap Card Component
//!
//! A content card that answers a tap with a sparkle burst and a message
//! bubble. The bubble hides itself after a few seconds; tapping again while
//! it shows restarts the timer instead of stacking hides.

use std::time::Duration;

use dioxus::prelude::*;

use crate::context::use_effects;

const BUBBLE_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Props, Clone, PartialEq)]
pub struct TapCardProps {
    pub icon: String,
    pub title: String,
    pub body: String,
    /// Shown in the bubble on tap
    pub message: String,
    #[props(default = String::new())]
    pub class: String,
}

#[component]
pub fn TapCard(props: TapCardProps) -> Element {
    let mut fx = use_effects();
    let mut bubble_visible = use_signal(|| false);
    let mut bubble_seq = use_signal(|| 0u64);

    let on_click = move |e: MouseEvent| {
        let p = e.client_coordinates();
        fx.burst_at(p.x, p.y);

        bubble_visible.set(true);
        let seq = bubble_seq() + 1;
        bubble_seq.set(seq);

        spawn(async move {
            tokio::time::sleep(BUBBLE_LIFETIME).await;
            // a newer tap owns the bubble now
            if *bubble_seq.peek() == seq {
                bubble_visible.set(false);
            }
        });
    };

    rsx! {
        div { class: "tap-card {props.class}", onclick: on_click,
            span { class: "card-icon", "aria-hidden": "true", "{props.icon}" }
            h3 { class: "card-title", "{props.title}" }
            p { class: "card-body", "{props.body}" }
            if bubble_visible() {
                div { class: "message-bubble", "{props.message}" }
            }
        }
    }
}
