//! Party Popper Component
//!
//! One-shot page-load burst over the welcome section: a sheet of falling
//! confetti plus popping emoji, half a second after launch, gone a few
//! seconds later. Purely decorative; it never fires again.

use std::time::Duration;

use dioxus::prelude::*;
use rand::Rng;

use crate::theme::colors;

const EMOJIS: [&str; 10] = ["🎉", "🎊", "🎈", "🎁", "🎂", "🎀", "💗", "✨", "⭐", "🌟"];

#[derive(Clone, Copy, PartialEq)]
enum PopperStage {
    Waiting,
    Bursting,
    Fading,
    Done,
}

#[derive(Clone, PartialEq)]
struct PopperPiece {
    left: f64,
    rotation: f64,
    color: &'static str,
    delay: f64,
    duration: f64,
}

#[derive(Clone, PartialEq)]
struct PopperEmoji {
    glyph: &'static str,
    left: f64,
    delay: f64,
}

fn burst() -> (Vec<PopperPiece>, Vec<PopperEmoji>) {
    let mut rng = rand::rng();
    let pieces = (0..80)
        .map(|_| PopperPiece {
            left: rng.random_range(0.0..100.0),
            rotation: rng.random_range(0.0..360.0),
            color: colors::CONFETTI[rng.random_range(0..colors::CONFETTI.len())],
            delay: rng.random_range(0.0..1.5),
            duration: rng.random_range(2.0..4.0),
        })
        .collect();
    let emojis = (0..24)
        .map(|_| PopperEmoji {
            glyph: EMOJIS[rng.random_range(0..EMOJIS.len())],
            left: rng.random_range(0.0..100.0),
            delay: rng.random_range(0.0..1.2),
        })
        .collect();
    (pieces, emojis)
}

/// Page-load celebration overlay.
#[component]
pub fn PartyPopper() -> Element {
    let mut stage = use_signal(|| PopperStage::Waiting);
    let mut pieces = use_signal(Vec::<PopperPiece>::new);
    let mut emojis = use_signal(Vec::<PopperEmoji>::new);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            let (p, e) = burst();
            pieces.set(p);
            emojis.set(e);
            stage.set(PopperStage::Bursting);

            tokio::time::sleep(Duration::from_secs(3)).await;
            stage.set(PopperStage::Fading);

            tokio::time::sleep(Duration::from_secs(1)).await;
            stage.set(PopperStage::Done);
        });
    });

    let class = match stage() {
        PopperStage::Waiting | PopperStage::Bursting => "party-popper",
        PopperStage::Fading => "party-popper fading",
        PopperStage::Done => return rsx! {},
    };

    rsx! {
        div { class: "{class}", "aria-hidden": "true",
            for (i, piece) in pieces.read().iter().enumerate() {
                div {
                    key: "p{i}",
                    class: "party-confetti",
                    style: "left: {piece.left}%; background-color: {piece.color}; \
                            transform: rotate({piece.rotation}deg); \
                            animation-delay: {piece.delay}s; animation-duration: {piece.duration}s;",
                }
            }
            for (i, emoji) in emojis.read().iter().enumerate() {
                div {
                    key: "e{i}",
                    class: "party-emoji",
                    style: "left: {emoji.left}%; animation-delay: {emoji.delay}s;",
                    "{emoji.glyph}"
                }
            }
        }
    }
}
