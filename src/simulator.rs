//! Line-oriented driver feeding commands into a [`Robot`].

use crate::core::Grid;
use crate::error::SimulatorError;
use crate::robot::Robot;
use std::io::{BufRead, Write};

/// Strategy for handling a rejected command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorStrategy {
    /// Stop the run and return the error
    Abort,

    /// Log a warning and continue with the next line
    #[default]
    IgnoreAndLog,
}

/// Counters for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the input
    pub lines: usize,
    /// Reports written to the output
    pub reports: usize,
    /// Rejected commands tolerated under [`ErrorStrategy::IgnoreAndLog`]
    pub errors: usize,
}

/// Runs a stream of command lines against one robot.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::Grid;
/// use toy_robot::simulator::Simulator;
///
/// let grid = Grid::default();
/// let mut simulator = Simulator::new(&grid);
/// let mut output = Vec::new();
///
/// let summary = simulator
///     .run("PLACE 0,0,NORTH\nMOVE\nREPORT\n".as_bytes(), &mut output)
///     .unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "0,1,NORTH\n");
/// assert_eq!(summary.reports, 1);
/// ```
#[derive(Debug)]
pub struct Simulator<'g> {
    robot: Robot<'g>,
    strategy: ErrorStrategy,
}

impl<'g> Simulator<'g> {
    /// Create a simulator with an unplaced robot on `grid`.
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            robot: Robot::new(grid),
            strategy: ErrorStrategy::default(),
        }
    }

    /// Set how rejected commands are handled (builder pattern).
    pub fn with_strategy(mut self, strategy: ErrorStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> ErrorStrategy {
        self.strategy
    }

    pub fn robot(&self) -> &Robot<'g> {
        &self.robot
    }

    /// Feed every line of `input` to the robot, in order, writing each
    /// report to `output` followed by `\n`.
    ///
    /// Lines are passed on raw, trailing terminator included. A line that is
    /// not valid UTF-8 cannot match the grammar and is skipped like any
    /// other malformed command.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<RunSummary, SimulatorError>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines += 1;

            let Ok(line) = std::str::from_utf8(&buf) else {
                tracing::debug!(line = summary.lines, "ignoring line that is not valid UTF-8");
                continue;
            };

            match self.robot.execute(line) {
                Ok(Some(report)) => {
                    writeln!(output, "{report}")?;
                    summary.reports += 1;
                }
                Ok(None) => {}
                Err(source) => match self.strategy {
                    ErrorStrategy::Abort => {
                        output.flush()?;
                        return Err(SimulatorError::Command {
                            line: summary.lines,
                            source,
                        });
                    }
                    ErrorStrategy::IgnoreAndLog => {
                        tracing::warn!(line = summary.lines, error = %source, "command rejected");
                        summary.errors += 1;
                    }
                },
            }
        }

        output.flush()?;
        tracing::debug!(
            lines = summary.lines,
            reports = summary.reports,
            errors = summary.errors,
            "run complete"
        );
        Ok(summary)
    }
}
