//! Sparkle Veil Component
//!
//! The surprise section's looping twinkle. Dormant until the entry pulse
//! flips it on; after that the CSS loop runs for the rest of the visit.

use dioxus::prelude::*;
use rand::Rng;

use crate::context::use_effects;

#[derive(Clone, PartialEq)]
struct Sparkle {
    left: f64,
    top: f64,
    size: f64,
    delay: f64,
}

fn field() -> Vec<Sparkle> {
    let mut rng = rand::rng();
    (0..18)
        .map(|_| Sparkle {
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            size: rng.random_range(0.8..1.8),
            delay: rng.random_range(0.0..4.0),
        })
        .collect()
}

/// Looping sparkle overlay for the surprise section.
#[component]
pub fn SparkleVeil() -> Element {
    let fx = use_effects();
    let sparkles = use_hook(field);
    let active = (fx.sparkle_loop)();

    rsx! {
        div {
            class: if active { "sparkles active" } else { "sparkles" },
            "aria-hidden": "true",
            for (i, s) in sparkles.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "sparkle",
                    style: "left: {s.left}%; top: {s.top}%; font-size: {s.size}rem; \
                            animation-delay: {s.delay}s;",
                    "✦"
                }
            }
        }
    }
}
