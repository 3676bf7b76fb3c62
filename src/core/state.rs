//! Robot lifecycle state and its pure transitions.
//!
//! A robot is either `Unplaced` (the initial state) or `Placed` with a pose.
//! Every transition here is a pure function returning a new state; the
//! [`Robot`](crate::robot::Robot) shell decides whether to commit it.

use super::direction::{Direction, Rotation};
use super::grid::Grid;
use crate::error::RobotError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cell coordinate on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell one step towards `facing`, or `None` on integer
    /// overflow.
    pub fn stepped(self, facing: Direction) -> Option<Self> {
        let (dx, dy) = facing.step();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

/// Where a placed robot stands and which way it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub position: Position,
    pub facing: Direction,
}

impl fmt::Display for Pose {
    /// Report format: `x,y,FACING`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.position.x, self.position.y, self.facing)
    }
}

/// Lifecycle state of a robot.
///
/// There is no transition back to `Unplaced` once a robot has been placed.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Direction, Grid, RobotState, Rotation};
///
/// let grid = Grid::new(5, 5).unwrap();
/// let state = RobotState::Unplaced;
/// assert!(state.advanced(&grid).is_none());
///
/// let state = RobotState::placed(&grid, 0, 0, Direction::North).unwrap();
/// let state = state.advanced(&grid).unwrap();
/// let state = state.turned(Rotation::Right).unwrap();
/// assert_eq!(state.report().as_deref(), Some("0,1,EAST"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotState {
    #[default]
    Unplaced,
    Placed(Pose),
}

impl RobotState {
    /// State name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unplaced => "Unplaced",
            Self::Placed(_) => "Placed",
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }

    pub fn pose(&self) -> Option<&Pose> {
        match self {
            Self::Placed(pose) => Some(pose),
            Self::Unplaced => None,
        }
    }

    /// Placed state at `(x, y)` facing `facing`.
    ///
    /// Fails with [`RobotError::OutOfBounds`] when the point is off `grid`.
    pub fn placed(grid: &Grid, x: i32, y: i32, facing: Direction) -> Result<Self, RobotError> {
        if !grid.within_bounds(x, y) {
            return Err(RobotError::OutOfBounds { x, y });
        }
        Ok(Self::Placed(Pose {
            position: Position::new(x, y),
            facing,
        }))
    }

    /// State after one step forward.
    ///
    /// `None` when unplaced or when the step would leave `grid`; the caller
    /// keeps its current state in both cases.
    pub fn advanced(&self, grid: &Grid) -> Option<Self> {
        let pose = self.pose()?;
        let next = pose.position.stepped(pose.facing)?;
        if !grid.within_bounds(next.x, next.y) {
            return None;
        }
        Some(Self::Placed(Pose {
            position: next,
            facing: pose.facing,
        }))
    }

    /// State after a quarter turn, or `None` when unplaced.
    pub fn turned(&self, rotation: Rotation) -> Option<Self> {
        let pose = self.pose()?;
        Some(Self::Placed(Pose {
            position: pose.position,
            facing: pose.facing.rotate(rotation),
        }))
    }

    /// `x,y,FACING` for a placed robot, `None` otherwise.
    pub fn report(&self) -> Option<String> {
        self.pose().map(Pose::to_string)
    }
}
