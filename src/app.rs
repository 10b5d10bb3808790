//! Root application component.
//!
//! Provides global styles, the engine context, and the card view. The card
//! is a single page; there are no routes.

use std::collections::HashSet;
use std::sync::Arc;

use dioxus::prelude::*;
use keepsake_core::{CardEngine, SwipeTracker};
use parking_lot::RwLock;

use crate::components::{ClickSparkleLayer, MouseFollower, NavDots, PartyPopper};
use crate::context::{
    apply_transition, use_card, use_effects, DomAnchors, EffectPulses, MountedSections,
    PointerGlow,
};
use crate::sections::CardSections;
use crate::theme::GLOBAL_STYLES;
use crate::viewport;

/// Root application component.
#[component]
pub fn App() -> Element {
    // Section components report in here as they mount; the engine's anchor
    // locator reads it, so navigation to an unmounted section is a no-op.
    let mounted: MountedSections = use_hook(|| Arc::new(RwLock::new(HashSet::new())));

    let locator = mounted.clone();
    let engine: Signal<CardEngine> = use_signal(move || {
        CardEngine::new(crate::card_content(), Box::new(DomAnchors::new(locator)))
    });
    use_context_provider(|| engine);
    use_context_provider(|| mounted);
    EffectPulses::provide();

    // One-way feed: scroll position -> engine. Never invoked by the engine.
    viewport::use_scroll_sync(engine);

    rsx! {
        style { {GLOBAL_STYLES} }
        CardView {}
    }
}

/// The card itself: the section stack plus every input adapter.
#[component]
fn CardView() -> Element {
    let mut card = use_card();
    let mut fx = use_effects();
    let mut swipe = use_signal(SwipeTracker::new);

    // Keyboard adapter: default scrolling is suppressed only when a
    // transition actually occurred (not at a boundary, not on other keys).
    let on_keydown = move |e: Event<KeyboardData>| {
        let key = e.key().to_string();
        if let Some(t) = card.write().handle_key(&key) {
            e.prevent_default();
            apply_transition(fx, &t);
        }
    };

    let on_touch_start = move |e: Event<TouchData>| {
        let touches = e.touches_changed();
        if let Some(point) = touches.first() {
            swipe.write().touch_start(point.screen_coordinates().y);
        }
    };

    let on_touch_end = move |e: Event<TouchData>| {
        let touches = e.touches_changed();
        let Some(point) = touches.first() else {
            return;
        };
        let Some(direction) = swipe.write().touch_end(point.screen_coordinates().y) else {
            return; // a tap, not a swipe
        };
        if let Some(t) = card.write().handle_swipe(direction) {
            apply_transition(fx, &t);
        }
    };

    let on_mouse_move = move |e: Event<MouseData>| {
        let p = e.client_coordinates();
        fx.pointer.set(PointerGlow {
            x: p.x,
            y: p.y,
            visible: true,
        });
    };

    let on_mouse_leave = move |_| {
        let glow = (fx.pointer)();
        fx.pointer.set(PointerGlow {
            visible: false,
            ..glow
        });
    };

    rsx! {
        main {
            class: "card",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_keydown,
            ontouchstart: on_touch_start,
            ontouchend: on_touch_end,
            onmousemove: on_mouse_move,
            onmouseleave: on_mouse_leave,

            CardSections {}

            NavDots {}
            ClickSparkleLayer {}
            MouseFollower {}
            PartyPopper {}
        }
    }
}
