//! Mouse Follower Component
//!
//! A little heart trailing the pointer. The card view writes positions onto
//! the effect bus; the lag comes from a CSS transition, so only this
//! component re-renders on pointer movement.

use dioxus::prelude::*;

use crate::context::use_effects;

#[component]
pub fn MouseFollower() -> Element {
    let fx = use_effects();
    let glow = (fx.pointer)();
    let opacity = if glow.visible { 0.6 } else { 0.0 };

    rsx! {
        div {
            class: "mouse-follower",
            "aria-hidden": "true",
            style: "left: {glow.x}px; top: {glow.y}px; opacity: {opacity};",
            "💗"
        }
    }
}
