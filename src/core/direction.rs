//! Compass directions and quarter-turn rotations.

use crate::error::RobotError;
use crate::macros::vocabulary;

vocabulary! {
    /// Compass direction the robot faces.
    pub enum Direction {
        North => "NORTH",
        East => "EAST",
        South => "SOUTH",
        West => "WEST",
    }
    unknown: RobotError::UnknownDirection
}

vocabulary! {
    /// A 90 degree turn: `Left` is counter-clockwise, `Right` clockwise.
    pub enum Rotation {
        Left => "LEFT",
        Right => "RIGHT",
    }
    unknown: RobotError::UnknownRotation
}

impl Direction {
    /// Direction faced after turning once by `rotation`.
    pub fn rotate(self, rotation: Rotation) -> Self {
        use Direction::*;
        match (self, rotation) {
            (North, Rotation::Left) => West,
            (North, Rotation::Right) => East,
            (East, Rotation::Left) => North,
            (East, Rotation::Right) => South,
            (South, Rotation::Left) => East,
            (South, Rotation::Right) => West,
            (West, Rotation::Left) => South,
            (West, Rotation::Right) => North,
        }
    }

    /// Unit `(dx, dy)` step taken when moving forward.
    pub fn step(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }
}
