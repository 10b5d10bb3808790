//! Property-based tests for the navigation engine
//!
//! Uses proptest to verify the no-op laws, indicator synchronization, the
//! swipe threshold, and the scroll probe mapping under arbitrary inputs.

use proptest::prelude::*;

use keepsake_core::{
    CardContent, CardEngine, NavIntent, ScrollSync, SectionExtent, StaticAnchors, SwipeTracker,
    ViewportSnapshot, SWIPE_THRESHOLD,
};

fn engine() -> CardEngine {
    CardEngine::new(CardContent::default(), Box::new(StaticAnchors::all()))
}

/// An arbitrary intent stream.
fn intent_strategy() -> impl Strategy<Value = NavIntent> {
    prop_oneof![
        3 => (0usize..12).prop_map(NavIntent::NavigateTo),
        2 => Just(NavIntent::Advance),
        2 => Just(NavIntent::Retreat),
    ]
}

/// Contiguous section extents with arbitrary positive heights.
fn extents_strategy() -> impl Strategy<Value = Vec<SectionExtent>> {
    prop::collection::vec(50.0f64..2000.0, 1..12).prop_map(|heights| {
        let mut top = 0.0;
        heights
            .into_iter()
            .map(|height| {
                let extent = SectionExtent { top, height };
                top += height;
                extent
            })
            .collect()
    })
}

proptest! {
    /// In-range navigation always lands where asked, with exactly that
    /// indicator active.
    #[test]
    fn navigate_to_in_range(index in 0usize..10) {
        let mut engine = engine();
        let t = engine.navigate_to(index).unwrap();
        prop_assert_eq!(t.to, index);
        prop_assert_eq!(engine.current_section(), index);
        let states = engine.indicators().states();
        prop_assert!(states[index]);
        prop_assert_eq!(states.iter().filter(|&&on| on).count(), 1);
    }

    /// Out-of-range navigation never changes anything.
    #[test]
    fn navigate_to_out_of_range_is_no_op(start in 0usize..10, index in 10usize..1000) {
        let mut engine = engine();
        engine.navigate_to(start).unwrap();
        prop_assert!(engine.navigate_to(index).is_none());
        prop_assert_eq!(engine.current_section(), start);
        prop_assert!(engine.indicators().is_active(start));
    }

    /// However the card is driven, the state invariant holds: `current` is
    /// in range and the active indicator matches it.
    #[test]
    fn intent_streams_preserve_invariants(intents in prop::collection::vec(intent_strategy(), 0..64)) {
        let mut engine = engine();
        let len = engine.registry().len();
        for intent in intents {
            let _ = engine.handle_intent(intent);
            let current = engine.current_section();
            prop_assert!(current < len);
            prop_assert_eq!(engine.indicators().active(), current);
        }
    }

    /// Advance then retreat from anywhere but the boundaries is the identity.
    #[test]
    fn advance_retreat_round_trip(start in 0usize..9) {
        let mut engine = engine();
        engine.navigate_to(start).unwrap();
        engine.advance().unwrap();
        engine.retreat().unwrap();
        prop_assert_eq!(engine.current_section(), start);
    }

    /// A swipe navigates exactly when its travel exceeds the threshold.
    #[test]
    fn swipe_threshold_law(start in 0.0f64..2000.0, delta in -400.0f64..400.0) {
        let mut tracker = SwipeTracker::new();
        tracker.touch_start(start);
        let direction = tracker.touch_end(start - delta);
        if delta.abs() > SWIPE_THRESHOLD {
            prop_assert!(direction.is_some());
        } else {
            prop_assert!(direction.is_none());
        }
    }

    /// With contiguous extents, a probe inside section k always evaluates to
    /// k, no matter how many scroll events fired that frame.
    #[test]
    fn probe_maps_to_containing_section(
        extents in extents_strategy(),
        pick in 0.0f64..1.0,
        within in 0.0f64..1.0,
        events in 1usize..8,
    ) {
        let k = ((extents.len() as f64 * pick) as usize).min(extents.len() - 1);
        let target = &extents[k];
        // place the probe strictly inside extent k
        let probe = target.top + target.height * within.min(0.999);
        let viewport = 600.0;
        let offset = probe - viewport / 2.0;

        let mut sync = ScrollSync::new();
        for _ in 0..events {
            sync.note_scroll(ViewportSnapshot {
                scroll_offset: offset,
                viewport_height: viewport,
                extents: extents.clone(),
            });
        }
        prop_assert_eq!(sync.evaluate(), Some(k));
        // coalesced: the burst evaluated exactly once
        prop_assert_eq!(sync.evaluate(), None);
    }
}
