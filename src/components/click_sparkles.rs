//! Click Sparkle Layer
//!
//! Renders the short-lived sparkle bursts pushed onto the effect bus by
//! interactive cards. Each glyph flies out along its own vector via CSS
//! custom properties; bursts remove themselves from the bus when done.

use dioxus::prelude::*;

use crate::context::use_effects;

/// Fixed overlay for in-flight sparkle bursts.
#[component]
pub fn ClickSparkleLayer() -> Element {
    let fx = use_effects();
    let bursts = fx.bursts.read();

    rsx! {
        div { class: "click-sparkle-layer", "aria-hidden": "true",
            for burst in bursts.iter() {
                for (i, g) in burst.glyphs.iter().enumerate() {
                    span {
                        key: "{burst.id}-{i}",
                        class: "click-sparkle",
                        style: "left: {burst.x}px; top: {burst.y}px; \
                                --fly-x: {g.dx}px; --fly-y: {g.dy}px;",
                        "{g.glyph}"
                    }
                }
            }
        }
    }
}
