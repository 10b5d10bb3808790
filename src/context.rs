//! Engine context plumbing for the card.
//!
//! Provides the [`CardEngine`] to all components via `use_context`, plus the
//! effect-pulse channels the fire-and-forget visuals listen on.
//!
//! ## Usage
//!
//! ```ignore
//! // In a component
//! let mut card = use_card();
//! if let Some(t) = card.write().advance() {
//!     apply_transition(use_effects(), &t);
//! }
//! ```

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use dioxus::document;
use dioxus::prelude::*;
use keepsake_core::{
    section_anchor_id, CardEngine, EffectKind, SectionAnchorLocator, Transition,
};
use parking_lot::RwLock;

/// Which section render targets are mounted, shared between the section
/// components (writers) and the engine's anchor locator (reader).
pub type MountedSections = Arc<RwLock<HashSet<usize>>>;

/// Anchor locator over the live document.
///
/// A section's anchor resolves once its element has mounted; until then the
/// engine treats navigation to it as a silent no-op.
pub struct DomAnchors {
    mounted: MountedSections,
}

impl DomAnchors {
    pub fn new(mounted: MountedSections) -> Self {
        Self { mounted }
    }
}

impl SectionAnchorLocator for DomAnchors {
    fn locate(&self, index: usize) -> Option<String> {
        self.mounted
            .read()
            .contains(&index)
            .then(|| section_anchor_id(index))
    }
}

/// Hook to access the card engine from context.
pub fn use_card() -> Signal<CardEngine> {
    use_context::<Signal<CardEngine>>()
}

/// Hook to access the mounted-section set from context.
pub fn use_mounted_sections() -> MountedSections {
    use_context::<MountedSections>()
}

/// One glyph of a click-sparkle burst, with its flight vector.
#[derive(Clone, PartialEq)]
pub struct BurstGlyph {
    pub glyph: &'static str,
    pub dx: f64,
    pub dy: f64,
}

/// A short-lived sparkle burst at a viewport position.
#[derive(Clone, PartialEq)]
pub struct SparkleBurst {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub glyphs: Vec<BurstGlyph>,
}

/// The trailing heart that follows the pointer.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct PointerGlow {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

/// Pulse channels for the fire-and-forget effects.
///
/// Effects are write-only from the navigation side: bumping a counter or
/// flipping a flag is the whole dispatch. Nothing reports back.
#[derive(Clone, Copy)]
pub struct EffectPulses {
    /// Bumped to restart the confetti shower
    pub confetti: Signal<u64>,
    /// Set once the surprise section's looping animation should run
    pub sparkle_loop: Signal<bool>,
    /// Live click-sparkle bursts
    pub bursts: Signal<Vec<SparkleBurst>>,
    /// Pointer position for the mouse follower
    pub pointer: Signal<PointerGlow>,
    burst_seq: Signal<u64>,
}

impl EffectPulses {
    /// Build the channels; called once from the root component.
    pub fn provide() -> Self {
        let pulses = Self {
            confetti: use_signal(|| 0),
            sparkle_loop: use_signal(|| false),
            bursts: use_signal(Vec::new),
            pointer: use_signal(PointerGlow::default),
            burst_seq: use_signal(|| 0),
        };
        use_context_provider(|| pulses);
        pulses
    }

    /// Spawn a sparkle burst at a viewport position; it cleans itself up
    /// after the animation has played out.
    pub fn burst_at(&mut self, x: f64, y: f64) {
        use rand::Rng;

        const GLYPHS: [&str; 6] = ["✨", "⭐", "💫", "🌟", "💗", "💕"];

        let mut rng = rand::rng();
        let id = (self.burst_seq)() + 1;
        self.burst_seq.set(id);
        let glyphs = (0..6)
            .map(|i| {
                let angle = std::f64::consts::TAU * i as f64 / 6.0;
                let distance = rng.random_range(50.0..80.0);
                BurstGlyph {
                    glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                    dx: angle.cos() * distance,
                    dy: angle.sin() * distance,
                }
            })
            .collect();

        self.bursts.write().push(SparkleBurst { id, x, y, glyphs });

        let mut bursts = self.bursts;
        spawn(async move {
            tokio::time::sleep(Duration::from_millis(900)).await;
            bursts.write().retain(|b| b.id != id);
        });
    }
}

/// Hook to access the effect pulses from context.
pub fn use_effects() -> EffectPulses {
    use_context::<EffectPulses>()
}

/// Bring a section's anchor into view with smooth motion. A missing element
/// is an expected absence; the script just does nothing.
pub fn scroll_to_anchor(anchor: &str) {
    let js = format!(
        r#"const el = document.getElementById("{anchor}");
           if (el) el.scrollIntoView({{ behavior: "smooth", block: "start" }});"#
    );
    document::eval(&js);
}

/// Act on a transition from the engine: scroll to the entered section and
/// pulse its entry effects.
pub fn apply_transition(fx: EffectPulses, transition: &Transition) {
    let mut fx = fx;
    scroll_to_anchor(&transition.anchor);
    for effect in &transition.effects {
        match effect {
            EffectKind::ConfettiBurst => fx.confetti += 1,
            EffectKind::SparkleLoop => fx.sparkle_loop.set(true),
            // the engine already reset the machine; the section re-renders
            // from its state
            EffectKind::ResetChoice => {}
        }
    }
}
