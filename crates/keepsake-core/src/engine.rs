//! The card engine: the primary entry point for Keepsake.
//!
//! `CardEngine` owns the navigation state and coordinates the registry, the
//! indicator set, the entry-effect table, and the choice machine. Input
//! adapters and the scroll synchronizer both feed it; the frontend renders
//! from it and applies the [`Transition`]s it hands back.
//!
//! # Example
//!
//! ```
//! use keepsake_core::{CardContent, CardEngine, StaticAnchors};
//!
//! let mut engine = CardEngine::new(CardContent::default(), Box::new(StaticAnchors::all()));
//!
//! let transition = engine.navigate_to(4).expect("birthday section exists");
//! assert_eq!(transition.to, 4);
//! assert_eq!(engine.current_section(), 4);
//! ```

use tracing::{debug, trace};

use crate::choice::{ChoiceMachine, ChoiceOption, ChoicePhase, ChoiceTicket};
use crate::content::CardContent;
use crate::effects::{EffectKind, EffectTable};
use crate::input::{key_intent, KeyIntent, SwipeDirection};
use crate::nav::{IndicatorSet, NavIntent, NavigationState, SectionAnchorLocator, Transition};
use crate::registry::SectionRegistry;

/// Main entry point for Keepsake.
///
/// Owns `current` exclusively; every component reads it or requests a change
/// through these methods, never mutates it directly.
pub struct CardEngine {
    registry: SectionRegistry,
    state: NavigationState,
    indicators: IndicatorSet,
    effects: EffectTable,
    choice: ChoiceMachine,
    content: CardContent,
    anchors: Box<dyn SectionAnchorLocator + Send + Sync>,
}

impl CardEngine {
    /// Build an engine for the standard ten-section card.
    pub fn new(
        content: CardContent,
        anchors: Box<dyn SectionAnchorLocator + Send + Sync>,
    ) -> Self {
        let registry = SectionRegistry::standard();
        let indicators = IndicatorSet::new(registry.len());
        let effects = EffectTable::for_registry(&registry);
        Self {
            registry,
            state: NavigationState::new(),
            indicators,
            effects,
            choice: ChoiceMachine::new(),
            content,
            anchors,
        }
    }

    /// The section registry.
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// The card copy.
    pub fn content(&self) -> &CardContent {
        &self.content
    }

    /// The current section index.
    pub fn current_section(&self) -> usize {
        self.state.current()
    }

    /// The indicator set; exactly one indicator is active, matching
    /// [`current_section`](Self::current_section).
    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    /// The choice interaction.
    pub fn choice(&self) -> &ChoiceMachine {
        &self.choice
    }

    /// Whether the card is on its final section.
    pub fn is_last(&self) -> bool {
        self.state.current() == self.registry.last()
    }

    // === Navigation ===

    /// Navigate to a section by index.
    ///
    /// Silent no-op (`None`) when the index is out of range or the section's
    /// render target cannot be located (not yet mounted). Otherwise updates
    /// state, resyncs the indicators, applies internal entry effects, and
    /// returns the transition for the frontend to act on.
    pub fn navigate_to(&mut self, index: usize) -> Option<Transition> {
        if !self.registry.contains(index) {
            trace!(index, "navigation ignored: index out of range");
            return None;
        }
        let Some(anchor) = self.anchors.locate(index) else {
            trace!(index, "navigation ignored: anchor not found");
            return None;
        };

        let from = self.state.current();
        self.state.set(index);
        self.indicators.set_active(index);

        let effects = self.effects.for_index(index).to_vec();
        if effects.contains(&EffectKind::ResetChoice) {
            self.choice.reset();
        }

        debug!(from, to = index, "section transition");
        Some(Transition {
            from,
            to: index,
            anchor,
            effects,
        })
    }

    /// Move to the next section; no-op at the last (never wraps).
    pub fn advance(&mut self) -> Option<Transition> {
        if self.is_last() {
            return None;
        }
        self.navigate_to(self.state.current() + 1)
    }

    /// Move to the previous section; no-op at the first.
    pub fn retreat(&mut self) -> Option<Transition> {
        let current = self.state.current();
        if current == 0 {
            return None;
        }
        self.navigate_to(current - 1)
    }

    /// Dispatch a navigation intent from an input adapter.
    pub fn handle_intent(&mut self, intent: NavIntent) -> Option<Transition> {
        match intent {
            NavIntent::NavigateTo(index) => self.navigate_to(index),
            NavIntent::Advance => self.advance(),
            NavIntent::Retreat => self.retreat(),
        }
    }

    /// Keyboard adapter: map a key name and navigate.
    ///
    /// Returns the transition so the caller suppresses default scroll
    /// handling only when one actually occurred (not at a boundary, not for
    /// unmapped keys).
    pub fn handle_key(&mut self, key: &str) -> Option<Transition> {
        match key_intent(key)? {
            KeyIntent::Advance => self.advance(),
            KeyIntent::Retreat => self.retreat(),
        }
    }

    /// Touch adapter: a classified swipe gesture.
    pub fn handle_swipe(&mut self, direction: SwipeDirection) -> Option<Transition> {
        match direction {
            SwipeDirection::Up => self.advance(),
            SwipeDirection::Down => self.retreat(),
        }
    }

    // === Scroll synchronization ===

    /// Direct state write from the scroll synchronizer.
    ///
    /// Only the visual position follows the scroll: indicators resync, but
    /// entry effects are NOT replayed and no scroll request is issued.
    /// Returns whether the current section changed.
    pub fn sync_from_scroll(&mut self, index: usize) -> bool {
        if !self.registry.contains(index) || index == self.state.current() {
            return false;
        }
        let from = self.state.current();
        self.state.set(index);
        self.indicators.set_active(index);
        trace!(from, to = index, "scroll sync");
        true
    }

    // === Choice interaction ===

    /// Select a choice option; `None` when the buttons are disabled
    /// (a choice was already made this visit).
    pub fn select_choice(&mut self, option: ChoiceOption) -> Option<ChoiceTicket> {
        self.choice.select(option)
    }

    /// Reveal the response for a ticket; stale tickets are no-ops.
    pub fn reveal_choice(&mut self, ticket: ChoiceTicket) -> bool {
        self.choice.reveal(ticket)
    }

    /// Whether the deferred auto-advance should still be scheduled: the
    /// ticket is current, the response is showing, and the card is not
    /// already on its last section.
    pub fn should_auto_advance(&self, ticket: ChoiceTicket) -> bool {
        self.choice.is_current(ticket)
            && matches!(self.choice.phase(), ChoicePhase::Shown(_))
            && !self.is_last()
    }

    /// The delayed automatic advance after a choice response. Stale-safe:
    /// resets and re-entries since the ticket was issued cancel it.
    pub fn choice_auto_advance(&mut self, ticket: ChoiceTicket) -> Option<Transition> {
        if !self.should_auto_advance(ticket) {
            return None;
        }
        let transition = self.advance()?;
        self.choice.expire_tickets();
        Some(transition)
    }
}

impl std::fmt::Debug for CardEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardEngine")
            .field("current", &self.state.current())
            .field("sections", &self.registry.len())
            .field("choice", &self.choice.phase())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticAnchors;

    fn engine() -> CardEngine {
        CardEngine::new(CardContent::default(), Box::new(StaticAnchors::all()))
    }

    #[test]
    fn navigate_updates_state_and_indicators() {
        let mut engine = engine();
        for i in 0..engine.registry().len() {
            let t = engine.navigate_to(i).unwrap();
            assert_eq!(t.to, i);
            assert_eq!(engine.current_section(), i);
            assert!(engine.indicators().is_active(i));
            assert_eq!(
                engine
                    .indicators()
                    .states()
                    .iter()
                    .filter(|&&on| on)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let mut engine = engine();
        engine.navigate_to(3).unwrap();
        assert!(engine.navigate_to(10).is_none());
        assert!(engine.navigate_to(usize::MAX).is_none());
        assert_eq!(engine.current_section(), 3);
        assert!(engine.indicators().is_active(3));
    }

    #[test]
    fn missing_anchor_is_a_no_op() {
        let mut engine = CardEngine::new(
            CardContent::default(),
            Box::new(StaticAnchors::with_holes(vec![5])),
        );
        engine.navigate_to(4).unwrap();
        assert!(engine.navigate_to(5).is_none());
        assert_eq!(engine.current_section(), 4);
    }

    #[test]
    fn boundaries_do_not_wrap() {
        let mut engine = engine();
        assert!(engine.retreat().is_none());
        assert_eq!(engine.current_section(), 0);

        let last = engine.registry().last();
        engine.navigate_to(last).unwrap();
        assert!(engine.advance().is_none());
        assert_eq!(engine.current_section(), last);
    }

    #[test]
    fn key_handling_suppresses_default_only_on_transition() {
        let mut engine = engine();
        // at the top boundary, ArrowUp must not claim the key
        assert!(engine.handle_key("ArrowUp").is_none());
        assert!(engine.handle_key("ArrowDown").is_some());
        assert!(engine.handle_key("PageUp").is_some());
        // unmapped keys never claim
        assert!(engine.handle_key("Enter").is_none());
    }

    #[test]
    fn scroll_sync_does_not_replay_effects() {
        let mut engine = engine();
        assert!(engine.sync_from_scroll(4));
        assert_eq!(engine.current_section(), 4);
        assert!(engine.indicators().is_active(4));
        // same index again: nothing to do
        assert!(!engine.sync_from_scroll(4));
        // out of range: ignored
        assert!(!engine.sync_from_scroll(99));
        assert_eq!(engine.current_section(), 4);
    }

    #[test]
    fn scroll_into_choice_does_not_reset_it() {
        let mut engine = engine();
        engine.navigate_to(7).unwrap();
        let ticket = engine.select_choice(ChoiceOption::Forgive).unwrap();

        // drifting away and back by scroll leaves the machine alone
        engine.sync_from_scroll(6);
        engine.sync_from_scroll(7);
        assert!(engine.choice.is_current(ticket));
        assert!(!engine.choice().buttons_enabled());
    }

    #[test]
    fn entering_choice_by_navigation_resets_it() {
        let mut engine = engine();
        engine.navigate_to(7).unwrap();
        let ticket = engine.select_choice(ChoiceOption::NeedTime).unwrap();
        engine.reveal_choice(ticket);

        let t = engine.navigate_to(7).unwrap();
        assert!(t.effects.contains(&EffectKind::ResetChoice));
        assert!(engine.choice().buttons_enabled());
        assert!(!engine.reveal_choice(ticket));
    }

    #[test]
    fn auto_advance_respects_ticket_and_boundary() {
        let mut engine = engine();
        engine.navigate_to(7).unwrap();
        let ticket = engine.select_choice(ChoiceOption::Forgive).unwrap();
        engine.reveal_choice(ticket);

        assert!(engine.should_auto_advance(ticket));
        let t = engine.choice_auto_advance(ticket).unwrap();
        assert_eq!(t.to, 8);
        assert!(t.effects.contains(&EffectKind::SparkleLoop));

        // ticket was for a visit that's over; nothing further fires
        assert!(engine.choice_auto_advance(ticket).is_none());
    }

    #[test]
    fn auto_advance_skipped_on_last_section() {
        let mut engine = engine();
        engine.navigate_to(7).unwrap();
        let ticket = engine.select_choice(ChoiceOption::Forgive).unwrap();
        engine.reveal_choice(ticket);

        // user scrolled to the end while the response was showing
        let last = engine.registry().last();
        engine.sync_from_scroll(last);
        assert!(!engine.should_auto_advance(ticket));
        assert!(engine.choice_auto_advance(ticket).is_none());
        assert_eq!(engine.current_section(), last);
    }
}
