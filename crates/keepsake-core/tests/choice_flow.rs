//! Choice interaction tests
//!
//! The deferred steps (reveal, hold, auto-advance) run on timers in the
//! frontend; here they are driven synchronously through the same engine
//! calls, including the stale-ticket paths that cancellation relies on.

use keepsake_core::{
    CardContent, CardEngine, ChoiceOption, ChoicePhase, StaticAnchors, AUTO_ADVANCE_DELAY,
    HOLD_DELAY, RESPONSE_DELAY,
};

const CHOICE: usize = 7;

fn engine_at_choice() -> CardEngine {
    let mut engine = CardEngine::new(CardContent::default(), Box::new(StaticAnchors::all()));
    engine.navigate_to(CHOICE).unwrap();
    engine
}

/// The full happy path: select, reveal, auto-advance to the surprise.
#[test]
fn select_reveal_advance() {
    let mut engine = engine_at_choice();

    let ticket = engine.select_choice(ChoiceOption::Forgive).unwrap();
    assert!(!engine.choice().buttons_enabled());

    assert!(engine.reveal_choice(ticket));
    assert_eq!(
        engine.choice().phase(),
        ChoicePhase::Shown(ChoiceOption::Forgive)
    );

    assert!(engine.should_auto_advance(ticket));
    let t = engine.choice_auto_advance(ticket).unwrap();
    assert_eq!(t.to, CHOICE + 1);

    // the chain fired; it must not fire again
    assert!(engine.choice_auto_advance(ticket).is_none());
    assert_eq!(engine.current_section(), CHOICE + 1);
}

/// Both options produce their own response text.
#[test]
fn responses_differ_by_option() {
    let engine = engine_at_choice();
    let content = engine.content();
    let forgive = content.choice.response_for(ChoiceOption::Forgive);
    let need_time = content.choice.response_for(ChoiceOption::NeedTime);
    assert!(!forgive.is_empty());
    assert!(!need_time.is_empty());
    assert_ne!(forgive, need_time);
}

/// Re-entering the choice section by navigation restores Idle and cancels
/// the pending chain, whatever step it was on.
#[test]
fn reentry_cancels_pending_chain() {
    let mut engine = engine_at_choice();
    let ticket = engine.select_choice(ChoiceOption::NeedTime).unwrap();

    // user clicks the choice indicator again before the reveal timer fires
    engine.navigate_to(CHOICE).unwrap();
    assert!(engine.choice().buttons_enabled());

    // the old chain's steps all dead-end
    assert!(!engine.reveal_choice(ticket));
    assert!(!engine.should_auto_advance(ticket));
    assert!(engine.choice_auto_advance(ticket).is_none());
    assert_eq!(engine.current_section(), CHOICE);
}

/// Leaving for another section and coming back also resets the machine.
#[test]
fn round_trip_resets_to_idle() {
    let mut engine = engine_at_choice();
    let ticket = engine.select_choice(ChoiceOption::Forgive).unwrap();
    engine.reveal_choice(ticket);

    engine.navigate_to(2).unwrap();
    engine.navigate_to(CHOICE).unwrap();

    assert_eq!(engine.choice().phase(), ChoicePhase::Idle);
    assert!(engine.choice().buttons_enabled());
    assert!(engine.choice_auto_advance(ticket).is_none());
}

/// A second selection during Responding is rejected; the first stands.
#[test]
fn duplicate_selection_rejected() {
    let mut engine = engine_at_choice();
    engine.select_choice(ChoiceOption::Forgive).unwrap();
    assert!(engine.select_choice(ChoiceOption::NeedTime).is_none());
    assert_eq!(
        engine.choice().phase(),
        ChoicePhase::Responding(ChoiceOption::Forgive)
    );
}

/// On the last section there is nothing to advance to; the chain ends quietly.
#[test]
fn no_auto_advance_from_last_section() {
    let mut engine = engine_at_choice();
    let ticket = engine.select_choice(ChoiceOption::Forgive).unwrap();
    engine.reveal_choice(ticket);

    let last = engine.registry().last();
    engine.sync_from_scroll(last);

    assert!(!engine.should_auto_advance(ticket));
    assert!(engine.choice_auto_advance(ticket).is_none());
    assert_eq!(engine.current_section(), last);
}

/// The documented pacing: 500ms to the response, 2s hold, 3s to the advance.
#[test]
fn delays_match_design() {
    assert_eq!(RESPONSE_DELAY.as_millis(), 500);
    assert_eq!(HOLD_DELAY.as_secs(), 2);
    assert_eq!(AUTO_ADVANCE_DELAY.as_secs(), 3);
}
