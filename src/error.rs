//! Error types for the robot and the simulator driving it.

use thiserror::Error;

/// Invalid argument supplied to the grid or a robot operation.
///
/// `place` raises `OutOfBounds` or `UnknownDirection` and `rotate` raises
/// `UnknownRotation`; the failing command leaves the robot state untouched.
/// `InvalidGrid` only comes from [`Grid::new`](crate::core::Grid::new),
/// before any robot exists.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RobotError {
    #[error("coordinates ({x},{y}) outside board boundaries")]
    OutOfBounds { x: i32, y: i32 },

    #[error("direction ({0}) is not recognised")]
    UnknownDirection(String),

    #[error("rotation ({0}) is not recognised")]
    UnknownRotation(String),

    #[error("grid dimensions {width}x{height} must both be positive")]
    InvalidGrid { width: u32, height: u32 },
}

/// Errors that stop a simulator run.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// Reading commands or writing reports failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A command was rejected and the run was configured to abort
    #[error("line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: RobotError,
    },
}
