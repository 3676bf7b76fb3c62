//! Core robot types and logic.
//!
//! This module contains the pure functional core of the simulator:
//! - The grid and its bounds check
//! - Closed direction and rotation vocabularies
//! - The `Unplaced` / `Placed` robot state and its transitions
//! - Immutable transition history
//!
//! Nothing in here performs I/O or logging.

mod direction;
mod grid;
mod history;
mod state;

pub use direction::{Direction, Rotation};
pub use grid::Grid;
pub use history::{StateHistory, StateTransition};
pub use state::{Pose, Position, RobotState};
