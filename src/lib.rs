//! Toy robot: a robot on a bounded square grid driven by text commands.
//!
//! The crate follows a "pure core, imperative shell" layout. The core
//! defines the grid, the closed direction and rotation vocabularies and the
//! robot's `Unplaced` / `Placed` state with pure transition functions. The
//! shell parses command lines, commits transitions and drives whole command
//! streams.
//!
//! # Commands
//!
//! - `PLACE X,Y,F` puts the robot at `(X,Y)` facing `F` (`NORTH`, `EAST`,
//!   `SOUTH` or `WEST`).
//! - `MOVE` steps one cell forward; steps off the board are discarded.
//! - `LEFT` / `RIGHT` turn 90 degrees.
//! - `REPORT` yields `X,Y,F`.
//!
//! Unrecognised lines are silently ignored, and every command except
//! `PLACE` is ignored until the robot has been placed.
//!
//! # Example
//!
//! ```rust
//! use toy_robot::core::Grid;
//! use toy_robot::robot::Robot;
//!
//! let grid = Grid::new(5, 5).unwrap();
//! let mut robot = Robot::new(&grid);
//!
//! robot.execute("PLACE 0,0,NORTH").unwrap();
//! robot.execute("MOVE").unwrap();
//! assert_eq!(robot.execute("REPORT").unwrap().as_deref(), Some("0,1,NORTH"));
//! ```

mod macros;

pub mod command;
pub mod core;
pub mod error;
pub mod robot;
pub mod simulator;

// Re-export commonly used types
pub use command::Command;
pub use self::core::{Direction, Grid, Pose, Position, RobotState, Rotation};
pub use error::{RobotError, SimulatorError};
pub use robot::Robot;
pub use simulator::{ErrorStrategy, RunSummary, Simulator};
