//! Confetti Component
//!
//! The birthday section's confetti shower. Pieces are plain divs riding a
//! CSS fall animation with randomized positions, delays and durations; the
//! whole field regenerates whenever the entry pulse bumps, which restarts
//! the shower on re-entry.

use dioxus::prelude::*;
use rand::Rng;

use crate::context::use_effects;
use crate::theme::colors;

const PIECE_COUNT: usize = 50;

#[derive(Clone, PartialEq)]
struct ConfettiPiece {
    key: String,
    left: f64,
    color: &'static str,
    delay: f64,
    duration: f64,
}

fn shower(generation: u64) -> Vec<ConfettiPiece> {
    let mut rng = rand::rng();
    (0..PIECE_COUNT)
        .map(|i| ConfettiPiece {
            key: format!("{generation}-{i}"),
            left: rng.random_range(0.0..100.0),
            color: colors::CONFETTI[rng.random_range(0..colors::CONFETTI.len())],
            delay: rng.random_range(0.0..5.0),
            duration: rng.random_range(3.0..6.0),
        })
        .collect()
}

/// Confetti overlay for one section.
#[component]
pub fn ConfettiField() -> Element {
    let fx = use_effects();
    let mut pieces = use_signal(Vec::<ConfettiPiece>::new);

    // regenerate on every burst pulse (including the initial one)
    use_effect(move || {
        let generation = (fx.confetti)();
        pieces.set(shower(generation));
    });

    rsx! {
        div { class: "confetti-container", "aria-hidden": "true",
            for piece in pieces.read().iter() {
                div {
                    key: "{piece.key}",
                    class: "confetti",
                    style: "left: {piece.left}%; background-color: {piece.color}; \
                            animation-delay: {piece.delay}s; animation-duration: {piece.duration}s;",
                }
            }
        }
    }
}
