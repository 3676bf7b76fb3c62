//! Transition history for a robot.
//!
//! Provides immutable tracking of committed robot transitions over time.
//! Rejected moves and no-op commands never reach the history.

use super::state::RobotState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: RobotState,
    /// The state being transitioned to
    pub to: RobotState,
    /// Canonical text of the command that caused it, e.g. `PLACE 1,2,EAST`
    pub command: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of robot transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Direction, Grid, RobotState, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let grid = Grid::default();
/// let placed = RobotState::placed(&grid, 0, 0, Direction::North).unwrap();
/// let moved = placed.advanced(&grid).unwrap();
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: RobotState::Unplaced,
///         to: placed,
///         command: "PLACE 0,0,NORTH".into(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: placed,
///         to: moved,
///         command: "MOVE".into(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Unplaced -> 0,0 -> 0,1
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    ///
    /// Use this instead of [`record`](Self::record) when extending a
    /// history owned by a long-running machine.
    pub fn push(&mut self, transition: StateTransition) {
        self.transitions.push(transition);
    }

    /// States traversed: the first `from`, then each `to` in order.
    pub fn get_path(&self) -> Vec<&RobotState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Elapsed time from the first to the last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, Grid, Rotation};

    fn sample() -> (RobotState, RobotState, RobotState) {
        let grid = Grid::default();
        let placed = RobotState::placed(&grid, 1, 1, Direction::North).unwrap();
        let moved = placed.advanced(&grid).unwrap();
        let turned = moved.turned(Rotation::Right).unwrap();
        (placed, moved, turned)
    }

    fn transition(from: RobotState, to: RobotState, command: &str) -> StateTransition {
        StateTransition {
            from,
            to,
            command: command.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let (placed, _, _) = sample();
        let history = StateHistory::new();
        let new_history =
            history.record(transition(RobotState::Unplaced, placed, "PLACE 1,1,NORTH"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let (placed, moved, _) = sample();
        let mut history = StateHistory::new();
        history.push(transition(RobotState::Unplaced, placed, "PLACE 1,1,NORTH"));
        history.push(transition(placed, moved, "MOVE"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get_path(), vec![&RobotState::Unplaced, &placed, &moved]);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let (placed, moved, turned) = sample();
        let history = StateHistory::new()
            .record(transition(RobotState::Unplaced, placed, "PLACE 1,1,NORTH"))
            .record(transition(placed, moved, "MOVE"))
            .record(transition(moved, turned, "RIGHT"));

        let path = history.get_path();
        assert_eq!(path, vec![&RobotState::Unplaced, &placed, &moved, &turned]);
        assert_eq!(history.transitions()[2].command, "RIGHT");
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let (placed, moved, _) = sample();
        let start = Utc::now();
        let later = start + chrono::Duration::milliseconds(250);

        let history = StateHistory::new()
            .record(StateTransition {
                timestamp: start,
                ..transition(RobotState::Unplaced, placed, "PLACE 1,1,NORTH")
            })
            .record(StateTransition {
                timestamp: later,
                ..transition(placed, moved, "MOVE")
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let (placed, moved, _) = sample();
        let history = StateHistory::new()
            .record(transition(RobotState::Unplaced, placed, "PLACE 1,1,NORTH"))
            .record(transition(placed, moved, "MOVE"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(history, deserialized);
    }
}
