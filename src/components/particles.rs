//! Floating Particles Component
//!
//! Ambient drifting glyphs behind a section's content. Parameters are
//! randomized once at mount; the drift itself is a CSS loop.

use dioxus::prelude::*;
use rand::Rng;

const GLYPHS: [&str; 6] = ["✨", "💫", "⭐", "🌟", "💗", "💕"];

#[derive(Clone, PartialEq)]
struct Particle {
    glyph: &'static str,
    left: f64,
    top: f64,
    size: f64,
    duration: f64,
    delay: f64,
}

fn drift(count: usize) -> Vec<Particle> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Particle {
            glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            size: rng.random_range(1.0..2.0),
            duration: rng.random_range(10.0..25.0),
            delay: rng.random_range(0.0..5.0),
        })
        .collect()
}

/// Ambient particle layer for one section.
#[component]
pub fn FloatingParticles(
    #[props(default = 12)] count: usize,
    #[props(default = 0.35)] opacity: f64,
) -> Element {
    let particles = use_hook(|| drift(count));

    rsx! {
        div { class: "floating-particles", "aria-hidden": "true",
            for (i, p) in particles.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "floating-particle",
                    style: "left: {p.left}%; top: {p.top}%; font-size: {p.size}rem; \
                            opacity: {opacity}; animation-duration: {p.duration}s; \
                            animation-delay: {p.delay}s;",
                    "{p.glyph}"
                }
            }
        }
    }
}
