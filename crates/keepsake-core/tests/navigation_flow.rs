//! End-to-end navigation tests
//!
//! These drive the engine the way the frontend does: intents in,
//! transitions out, indicators always in sync with the current section.

use keepsake_core::{
    CardContent, CardEngine, EffectKind, NavIntent, ScrollSync, SectionExtent, StaticAnchors,
    SwipeTracker, ViewportSnapshot,
};

fn engine() -> CardEngine {
    CardEngine::new(CardContent::default(), Box::new(StaticAnchors::all()))
}

/// Section heights laid out contiguously, like the rendered card.
fn snapshot(offset: f64, viewport: f64, heights: &[f64]) -> ViewportSnapshot {
    let mut top = 0.0;
    let extents = heights
        .iter()
        .map(|&height| {
            let extent = SectionExtent { top, height };
            top += height;
            extent
        })
        .collect();
    ViewportSnapshot {
        scroll_offset: offset,
        viewport_height: viewport,
        extents,
    }
}

// ============================================================================
// Navigation laws
// ============================================================================

/// Starting at 0, three advances land on section 3 with only indicator 3 lit.
#[test]
fn three_advances_reach_section_three() {
    let mut engine = engine();
    for _ in 0..3 {
        engine.advance().unwrap();
    }
    assert_eq!(engine.current_section(), 3);

    let states = engine.indicators().states();
    assert!(states[3]);
    assert_eq!(states.iter().filter(|&&on| on).count(), 1);
}

/// Walking forward through the whole card and back again visits every
/// section exactly once per direction and stops cleanly at the boundaries.
#[test]
fn full_walkthrough_and_back() {
    let mut engine = engine();
    let last = engine.registry().last();

    for expected in 1..=last {
        assert_eq!(engine.advance().unwrap().to, expected);
    }
    assert!(engine.advance().is_none());

    for expected in (0..last).rev() {
        assert_eq!(engine.retreat().unwrap().to, expected);
    }
    assert!(engine.retreat().is_none());
    assert_eq!(engine.current_section(), 0);
}

/// Intents behave exactly like the direct calls they stand for.
#[test]
fn intents_match_direct_calls() {
    let mut engine = engine();
    assert_eq!(engine.handle_intent(NavIntent::Advance).unwrap().to, 1);
    assert_eq!(
        engine.handle_intent(NavIntent::NavigateTo(6)).unwrap().to,
        6
    );
    assert_eq!(engine.handle_intent(NavIntent::Retreat).unwrap().to, 5);
    assert!(engine.handle_intent(NavIntent::NavigateTo(42)).is_none());
    assert_eq!(engine.current_section(), 5);
}

/// Transitions always carry the anchor of the section navigated to.
#[test]
fn transitions_carry_anchor() {
    let mut engine = engine();
    let t = engine.navigate_to(7).unwrap();
    assert_eq!(t.anchor, "section-7");
    assert_eq!(t.from, 0);
}

// ============================================================================
// Entry effects
// ============================================================================

/// Entering the birthday section restarts confetti; unmapped sections fire
/// nothing.
#[test]
fn entry_effects_fire_on_navigation_only() {
    let mut engine = engine();

    let t = engine.navigate_to(4).unwrap();
    assert_eq!(t.effects, vec![EffectKind::ConfettiBurst]);

    let t = engine.navigate_to(2).unwrap();
    assert!(t.effects.is_empty());

    let t = engine.navigate_to(8).unwrap();
    assert_eq!(t.effects, vec![EffectKind::SparkleLoop]);
}

// ============================================================================
// Scroll synchronization against the engine
// ============================================================================

/// A burst of scroll events collapses to one evaluation, and the engine
/// follows the probe without replaying effects.
#[test]
fn scroll_burst_converges_once() {
    let mut engine = engine();
    let mut sync = ScrollSync::new();
    let heights = [900.0; 10];

    // five scroll events inside one frame, all landing in section 6
    for step in 0..5 {
        sync.note_scroll(snapshot(5400.0 + f64::from(step), 900.0, &heights));
    }

    let index = sync.evaluate().unwrap();
    assert_eq!(index, 6);
    assert!(engine.sync_from_scroll(index));
    assert_eq!(engine.current_section(), 6);
    assert!(engine.indicators().is_active(6));

    // the frame consumed the burst; a quiet frame does nothing
    assert_eq!(sync.evaluate(), None);
}

/// A probe in a layout gap leaves the engine exactly where it was.
#[test]
fn gap_probe_leaves_state_unchanged() {
    let mut engine = engine();
    engine.navigate_to(2).unwrap();

    let mut sync = ScrollSync::new();
    sync.note_scroll(ViewportSnapshot {
        scroll_offset: 0.0,
        viewport_height: 800.0, // probe = 400
        extents: vec![SectionExtent {
            top: 1000.0,
            height: 800.0,
        }],
    });

    assert_eq!(sync.evaluate(), None);
    assert_eq!(engine.current_section(), 2);
    assert!(engine.indicators().is_active(2));
}

// ============================================================================
// Swipe adapter against the engine
// ============================================================================

/// 49px of travel is a tap; 51px navigates.
#[test]
fn swipe_threshold_boundary_drives_navigation() {
    let mut engine = engine();
    let mut tracker = SwipeTracker::new();

    tracker.touch_start(500.0);
    assert!(tracker.touch_end(451.0).is_none());
    assert_eq!(engine.current_section(), 0);

    tracker.touch_start(500.0);
    let direction = tracker.touch_end(449.0).unwrap();
    let t = engine.handle_swipe(direction).unwrap();
    assert_eq!(t.to, 1);

    // swipe down goes back
    tracker.touch_start(400.0);
    let direction = tracker.touch_end(451.0).unwrap();
    assert_eq!(engine.handle_swipe(direction).unwrap().to, 0);
}

/// Swiping down at the first section is a no-op, not an error.
#[test]
fn swipe_at_boundary_is_ignored() {
    let mut engine = engine();
    let mut tracker = SwipeTracker::new();

    tracker.touch_start(300.0);
    let direction = tracker.touch_end(500.0).unwrap();
    assert!(engine.handle_swipe(direction).is_none());
    assert_eq!(engine.current_section(), 0);
}
