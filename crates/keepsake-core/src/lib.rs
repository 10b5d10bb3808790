//! Keepsake Core Library
//!
//! Navigation engine for a scroll-driven interactive greeting card.
//!
//! ## Overview
//!
//! A keepsake card is a fixed sequence of themed sections (welcome, apology,
//! birthday wishes, promises, a binary "choice" interaction, a surprise
//! finale) presented one viewport at a time. This crate owns everything with
//! state: which section is current, how scroll position maps back onto the
//! section list, how raw keyboard/touch input becomes navigation, and the
//! choice interaction's small state machine. Rendering and visual effects
//! live in the desktop frontend; they consume [`Transition`]s and never
//! mutate navigation state directly.
//!
//! ## Core principles
//!
//! - **Single owner**: `current` lives in one [`NavigationState`] record
//!   inside [`CardEngine`]; every other component reads it or requests a
//!   change through engine methods.
//! - **Silent no-ops**: out-of-range indices and missing render targets are
//!   expected absences, not errors. The worst failure mode is a missing
//!   visual effect.
//! - **Cancelable continuations**: every deferred step of the choice
//!   interaction is keyed to an epoch, so re-entering the section invalidates
//!   pending timers instead of racing them.
//!
//! ## Quick start
//!
//! ```
//! use keepsake_core::{CardContent, CardEngine, StaticAnchors};
//!
//! let mut engine = CardEngine::new(
//!     CardContent::default(),
//!     Box::new(StaticAnchors::all()),
//! );
//!
//! engine.advance();
//! engine.advance();
//! assert_eq!(engine.current_section(), 2);
//! assert!(engine.indicators().is_active(2));
//! ```

pub mod choice;
pub mod content;
pub mod effects;
pub mod engine;
pub mod error;
pub mod input;
pub mod nav;
pub mod registry;
pub mod scroll;

// Re-exports
pub use choice::{
    ChoiceMachine, ChoiceOption, ChoicePhase, ChoiceTicket, AUTO_ADVANCE_DELAY, HOLD_DELAY,
    RESPONSE_DELAY,
};
pub use content::{
    ApologyContent, BirthdayContent, CardContent, ChoiceContent, FeelingCard, FinaleContent,
    ImportanceItem, PromiseItem, SurpriseContent, WelcomeContent, WishItem,
};
pub use effects::{EffectKind, EffectTable};
pub use engine::CardEngine;
pub use error::CardError;
pub use input::{key_intent, KeyIntent, SwipeDirection, SwipeTracker, SWIPE_THRESHOLD};
pub use nav::{IndicatorSet, NavIntent, NavigationState, SectionAnchorLocator, Transition};
pub use registry::{section_anchor_id, Section, SectionKind, SectionRegistry};
pub use scroll::{ScrollSync, SectionExtent, ViewportSnapshot};

/// Anchor locator whose answers are fixed up front.
///
/// The desktop frontend locates anchors in the live document; tests and
/// examples use this one instead. `all()` reports every index present,
/// `with_holes` simulates sections whose render target is missing.
#[derive(Debug, Clone, Default)]
pub struct StaticAnchors {
    missing: Vec<usize>,
}

impl StaticAnchors {
    /// Every section's anchor resolves.
    pub fn all() -> Self {
        Self::default()
    }

    /// Every anchor resolves except the listed indices.
    pub fn with_holes(missing: Vec<usize>) -> Self {
        Self { missing }
    }
}

impl SectionAnchorLocator for StaticAnchors {
    fn locate(&self, index: usize) -> Option<String> {
        if self.missing.contains(&index) {
            None
        } else {
            Some(section_anchor_id(index))
        }
    }
}
