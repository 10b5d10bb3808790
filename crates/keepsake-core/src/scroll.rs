//! Scroll synchronization.
//!
//! The viewport bridge reports a [`ViewportSnapshot`] on every scroll
//! occurrence; [`ScrollSync`] coalesces them so the mapping back to a
//! section index is evaluated at most once per animation frame, however many
//! scroll events fired in between.

use serde::{Deserialize, Serialize};

/// Vertical extent of one section in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionExtent {
    /// Top edge, in document coordinates
    pub top: f64,
    /// Rendered height
    pub height: f64,
}

impl SectionExtent {
    /// Whether `probe` falls inside the half-open extent `[top, top + height)`.
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// What the viewport looked like at one scroll occurrence.
///
/// `extents` is indexed like the section registry: `extents[i]` is section
/// `i`'s extent at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    /// Vertical scroll offset of the document
    pub scroll_offset: f64,
    /// Height of the visible viewport
    pub viewport_height: f64,
    /// Per-section extents, in registry order
    pub extents: Vec<SectionExtent>,
}

impl ViewportSnapshot {
    /// The probe point: the vertical center of the viewport, in document
    /// coordinates. The section containing it is the one "being viewed".
    pub fn probe(&self) -> f64 {
        self.scroll_offset + self.viewport_height / 2.0
    }
}

/// Coalescing scroll evaluator.
///
/// `note_scroll` may be called any number of times between frames; later
/// snapshots replace earlier ones. `evaluate` consumes the pending snapshot,
/// so each scroll burst is mapped to a section exactly once.
#[derive(Debug, Default)]
pub struct ScrollSync {
    pending: Option<ViewportSnapshot>,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll occurrence. Cheap; safe to call per event.
    pub fn note_scroll(&mut self, snapshot: ViewportSnapshot) {
        self.pending = Some(snapshot);
    }

    /// Whether a scroll occurred since the last evaluation.
    pub fn dirty(&self) -> bool {
        self.pending.is_some()
    }

    /// Map the latest snapshot to the section containing the probe.
    ///
    /// Returns `None` when nothing scrolled since the last frame, and also
    /// when the probe falls in a gap covered by no extent — in the gap case
    /// the caller leaves the current section unchanged (sticky behavior,
    /// intentional for non-contiguous layouts).
    pub fn evaluate(&mut self) -> Option<usize> {
        let snapshot = self.pending.take()?;
        let probe = snapshot.probe();
        snapshot.extents.iter().position(|e| e.contains(probe))
    }
}
