//! Scroll/viewport source.
//!
//! A small script in the webview reports a [`ViewportSnapshot`] on every
//! scroll occurrence; a frame ticker on the Rust side asks the coalescing
//! [`ScrollSync`] for at most one section evaluation per frame and writes
//! the result into the engine. The feed is one-way: the engine never calls
//! back into it.

use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;
use keepsake_core::{CardEngine, ScrollSync, ViewportSnapshot};

/// One evaluation per rendered frame, give or take.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Installed once. Sends a snapshot per scroll event plus one initial fix so
/// the indicators are right before the first scroll.
const SNAPSHOT_JS: &str = r#"
    const snapshot = () => ({
        scroll_offset: window.scrollY,
        viewport_height: window.innerHeight,
        extents: Array.from(document.querySelectorAll(".card-section")).map((el) => {
            const rect = el.getBoundingClientRect();
            return { top: rect.top + window.scrollY, height: rect.height };
        }),
    });
    window.addEventListener("scroll", () => dioxus.send(snapshot()), { passive: true });
    dioxus.send(snapshot());
"#;

/// Keep the engine's current section in sync with the scroll position.
///
/// Scroll-derived changes update state and indicators only; entry effects
/// are never replayed from here.
pub fn use_scroll_sync(card: Signal<CardEngine>) {
    use_effect(move || {
        let mut card = card;
        spawn(async move {
            let mut eval = document::eval(SNAPSHOT_JS);
            let mut sync = ScrollSync::new();
            let mut frames = tokio::time::interval(FRAME_INTERVAL);

            loop {
                tokio::select! {
                    snapshot = eval.recv::<ViewportSnapshot>() => {
                        match snapshot {
                            Ok(snapshot) => sync.note_scroll(snapshot),
                            Err(e) => {
                                tracing::warn!("viewport bridge closed: {e:?}");
                                break;
                            }
                        }
                    }
                    _ = frames.tick() => {
                        // None both on quiet frames and when the probe fell
                        // in a gap; either way the section stays put.
                        if let Some(index) = sync.evaluate() {
                            if index != card.peek().current_section() {
                                card.write().sync_from_scroll(index);
                            }
                        }
                    }
                }
            }
        });
    });
}
