//! Fixed-size board the robot moves on.

use crate::error::RobotError;
use serde::{Deserialize, Serialize};

/// Rectangular grid of integer cells indexed from `(0,0)` at the south-west
/// corner.
///
/// Immutable once built; any number of robots may share one by reference.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::Grid;
///
/// let grid = Grid::new(5, 5).unwrap();
/// assert!(grid.within_bounds(4, 4));
/// assert!(!grid.within_bounds(5, 0));
/// assert!(!grid.within_bounds(-1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Create a grid, rejecting a zero width or height.
    pub fn new(width: u32, height: u32) -> Result<Self, RobotError> {
        if width == 0 || height == 0 {
            return Err(RobotError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True iff `0 <= x < width` and `0 <= y < height`.
    ///
    /// Any integer is a legal query; points off the board simply yield
    /// `false`.
    pub fn within_bounds(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }
}

impl Default for Grid {
    /// The classic 5x5 table top.
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}
