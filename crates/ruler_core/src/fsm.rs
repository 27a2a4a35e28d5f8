//! Phase state machines
//!
//! Flat state machines for control interaction phases. A phase type lists
//! its transitions by implementing [`StateTransitions`]; [`StateMachine`]
//! tracks the current phase and a short transition history.

use std::fmt::Debug;

use smallvec::SmallVec;

use crate::events::EventType;

/// Number of transitions kept in the history ring
const HISTORY_LIMIT: usize = 16;

/// Trait for phase enums that define their own transitions
///
/// ```rust
/// use ruler_core::events::event_types::*;
/// use ruler_core::fsm::StateTransitions;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Knob {
///     Idle,
///     Held,
/// }
///
/// impl StateTransitions for Knob {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (Knob::Idle, DRAG_START) => Some(Knob::Held),
///             (Knob::Held, DRAG_END) => Some(Knob::Idle),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Knob::Idle.on_event(DRAG_START), Some(Knob::Held));
/// ```
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine<S: StateTransitions> {
    current_state: S,
    /// Most recent transitions (for debugging)
    history: SmallVec<[(S, EventType, S); HISTORY_LIMIT]>,
}

impl<S: StateTransitions> StateMachine<S> {
    /// Create a new state machine in its initial state
    pub fn new(initial_state: S) -> Self {
        Self {
            current_state: initial_state,
            history: SmallVec::new(),
        }
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get transition history, oldest first
    pub fn history(&self) -> &[(S, EventType, S)] {
        &self.history
    }

    /// Send an event, returning the (possibly unchanged) current state
    pub fn send(&mut self, event: EventType) -> S {
        let current = self.current_state;
        let Some(to_state) = current.on_event(event) else {
            return current;
        };

        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push((current, event, to_state));
        self.current_state = to_state;

        tracing::debug!(?current, event, ?to_state, "phase transition");
        to_state
    }
}

impl<S: StateTransitions + Default> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_types::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum Phase {
        #[default]
        Idle,
        Dragging,
        Gliding,
    }

    impl StateTransitions for Phase {
        fn on_event(&self, event: EventType) -> Option<Self> {
            match (self, event) {
                (Phase::Idle | Phase::Gliding, DRAG_START) => Some(Phase::Dragging),
                (Phase::Dragging, DRAG_END) => Some(Phase::Idle),
                (Phase::Dragging, FLING) => Some(Phase::Gliding),
                (Phase::Gliding, SETTLED) => Some(Phase::Idle),
                _ => None,
            }
        }
    }

    #[test]
    fn test_simple_transitions() {
        let mut fsm = StateMachine::new(Phase::Idle);
        assert_eq!(fsm.current_state(), Phase::Idle);

        fsm.send(DRAG_START);
        assert!(fsm.is_in(Phase::Dragging));

        fsm.send(FLING);
        assert!(fsm.is_in(Phase::Gliding));

        fsm.send(SETTLED);
        assert!(fsm.is_in(Phase::Idle));
    }

    #[test]
    fn test_invalid_event_no_transition() {
        let mut fsm = StateMachine::<Phase>::default();

        // DRAG_END is not valid in Idle
        assert_eq!(fsm.send(DRAG_END), Phase::Idle);
        assert!(fsm.history().is_empty());
    }

    #[test]
    fn test_history() {
        let mut fsm = StateMachine::new(Phase::Idle);
        fsm.send(DRAG_START);
        fsm.send(DRAG_END);

        let history = fsm.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], (Phase::Idle, DRAG_START, Phase::Dragging));
        assert_eq!(history[1], (Phase::Dragging, DRAG_END, Phase::Idle));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut fsm = StateMachine::new(Phase::Idle);
        for _ in 0..HISTORY_LIMIT {
            fsm.send(DRAG_START);
            fsm.send(DRAG_END);
        }

        assert_eq!(fsm.history().len(), HISTORY_LIMIT);
        assert_eq!(
            *fsm.history().last().unwrap(),
            (Phase::Dragging, DRAG_END, Phase::Idle)
        );
    }
}
