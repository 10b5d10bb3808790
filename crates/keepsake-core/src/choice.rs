//! The choice interaction: the card's one true state machine.
//!
//! `Idle → Responding → Shown`, driven by the view through fixed delays.
//! Every deferred continuation carries a [`ChoiceTicket`] bound to the
//! machine's epoch at selection time; resetting the machine bumps the epoch,
//! so continuations from a previous visit become silent no-ops instead of
//! racing the new one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay between selecting an option and revealing the response text.
pub const RESPONSE_DELAY: Duration = Duration::from_millis(500);

/// How long the response is held before the auto-advance is considered.
pub const HOLD_DELAY: Duration = Duration::from_secs(2);

/// Further delay before the automatic advance fires.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(3);

/// The two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceOption {
    /// "Yes, I forgive you"
    Forgive,
    /// "I need more time"
    NeedTime,
}

/// Where the interaction currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChoicePhase {
    /// Both buttons enabled, nothing selected this visit
    #[default]
    Idle,
    /// An option was selected; buttons disabled; response pending
    Responding(ChoiceOption),
    /// Response text is on screen
    Shown(ChoiceOption),
}

/// Proof that a deferred continuation belongs to the current visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceTicket {
    epoch: u64,
    option: ChoiceOption,
}

impl ChoiceTicket {
    /// The option this ticket was issued for.
    pub fn option(&self) -> ChoiceOption {
        self.option
    }
}

/// The choice state machine.
#[derive(Debug, Default)]
pub struct ChoiceMachine {
    phase: ChoicePhase,
    epoch: u64,
}

impl ChoiceMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> ChoicePhase {
        self.phase
    }

    /// Buttons accept input only while idle.
    pub fn buttons_enabled(&self) -> bool {
        matches!(self.phase, ChoicePhase::Idle)
    }

    /// Select an option. The choice is terminal for this visit: both buttons
    /// are disabled in the same synchronous step, and a second selection is
    /// rejected. Returns a ticket for the deferred reveal/advance steps.
    pub fn select(&mut self, option: ChoiceOption) -> Option<ChoiceTicket> {
        if !self.buttons_enabled() {
            return None;
        }
        self.phase = ChoicePhase::Responding(option);
        Some(ChoiceTicket {
            epoch: self.epoch,
            option,
        })
    }

    /// Reveal the response for a previously issued ticket. Stale tickets
    /// (issued before a reset) are ignored.
    pub fn reveal(&mut self, ticket: ChoiceTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match self.phase {
            ChoicePhase::Responding(option) if option == ticket.option => {
                self.phase = ChoicePhase::Shown(option);
                true
            }
            _ => false,
        }
    }

    /// Whether the ticket was issued during the current visit.
    pub fn is_current(&self, ticket: ChoiceTicket) -> bool {
        ticket.epoch == self.epoch
    }

    /// Back to `Idle`: buttons re-enabled, response cleared, and every
    /// outstanding ticket invalidated. Called when the choice section is
    /// re-entered.
    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.phase = ChoicePhase::Idle;
    }

    /// Invalidate outstanding tickets without leaving the current phase.
    /// Used once the scheduled advance has fired, so it cannot fire twice.
    pub(crate) fn expire_tickets(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_disables_buttons_synchronously() {
        let mut machine = ChoiceMachine::new();
        assert!(machine.buttons_enabled());

        let ticket = machine.select(ChoiceOption::Forgive);
        assert!(ticket.is_some());
        assert!(!machine.buttons_enabled());
        assert_eq!(
            machine.phase(),
            ChoicePhase::Responding(ChoiceOption::Forgive)
        );
    }

    #[test]
    fn second_select_is_rejected() {
        let mut machine = ChoiceMachine::new();
        machine.select(ChoiceOption::Forgive).unwrap();
        assert_eq!(machine.select(ChoiceOption::NeedTime), None);
        assert_eq!(
            machine.phase(),
            ChoicePhase::Responding(ChoiceOption::Forgive)
        );
    }

    #[test]
    fn reveal_moves_to_shown() {
        let mut machine = ChoiceMachine::new();
        let ticket = machine.select(ChoiceOption::NeedTime).unwrap();
        assert!(machine.reveal(ticket));
        assert_eq!(machine.phase(), ChoicePhase::Shown(ChoiceOption::NeedTime));
    }

    #[test]
    fn reveal_is_not_repeatable() {
        let mut machine = ChoiceMachine::new();
        let ticket = machine.select(ChoiceOption::Forgive).unwrap();
        assert!(machine.reveal(ticket));
        assert!(!machine.reveal(ticket));
    }

    #[test]
    fn reset_restores_idle_from_any_phase() {
        let mut machine = ChoiceMachine::new();

        machine.select(ChoiceOption::Forgive).unwrap();
        machine.reset();
        assert_eq!(machine.phase(), ChoicePhase::Idle);
        assert!(machine.buttons_enabled());

        let ticket = machine.select(ChoiceOption::NeedTime).unwrap();
        machine.reveal(ticket);
        machine.reset();
        assert_eq!(machine.phase(), ChoicePhase::Idle);
        assert!(machine.buttons_enabled());
    }

    #[test]
    fn stale_tickets_are_ignored_after_reset() {
        let mut machine = ChoiceMachine::new();
        let stale = machine.select(ChoiceOption::Forgive).unwrap();
        machine.reset();

        assert!(!machine.is_current(stale));
        assert!(!machine.reveal(stale));
        assert_eq!(machine.phase(), ChoicePhase::Idle);

        // a fresh visit is unaffected by the stale ticket
        let fresh = machine.select(ChoiceOption::NeedTime).unwrap();
        assert!(machine.reveal(fresh));
    }
}
