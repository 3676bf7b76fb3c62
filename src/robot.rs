//! Robot command interpreter.
//!
//! [`Robot`] is the imperative shell around the pure core: it parses each
//! command line, asks [`RobotState`] for the next state, commits it and
//! records the transition history.
//!
//! Two deliberate, permissive rules shape the contract:
//! - lines outside the command grammar are silently ignored by `execute`;
//! - `move`, `rotate` and `report` do nothing until the robot is placed.
//!
//! Only invalid arguments (off-board placement, unknown direction or
//! rotation) surface as errors.

use crate::command::Command;
use crate::core::{Direction, Grid, Rotation, RobotState, StateHistory, StateTransition};
use crate::error::RobotError;
use chrono::Utc;

/// A robot on a shared, read-only grid.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::Grid;
/// use toy_robot::robot::Robot;
///
/// let grid = Grid::new(5, 5).unwrap();
/// let mut robot = Robot::new(&grid);
///
/// for line in ["PLACE 1,2,EAST", "MOVE", "MOVE", "LEFT", "MOVE"] {
///     robot.execute(line).unwrap();
/// }
/// assert_eq!(robot.execute("REPORT").unwrap().as_deref(), Some("3,3,NORTH"));
/// ```
#[derive(Clone, Debug)]
pub struct Robot<'g> {
    grid: &'g Grid,
    state: RobotState,
    history: StateHistory,
}

impl<'g> Robot<'g> {
    /// Create an unplaced robot on `grid`.
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            state: RobotState::Unplaced,
            history: StateHistory::new(),
        }
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Current state (pure)
    pub fn state(&self) -> &RobotState {
        &self.state
    }

    /// Committed transitions so far (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn is_placed(&self) -> bool {
        self.state.is_placed()
    }

    /// Parse one command line and apply it.
    ///
    /// Returns `Ok(Some(report))` for `REPORT` on a placed robot and
    /// `Ok(None)` for every other accepted or ignored line. A line that does
    /// not match the grammar is not an error. `Err` is returned only when a
    /// well-formed `PLACE` carries coordinates off the grid; the state is
    /// then unchanged.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, RobotError> {
        let Some(command) = Command::parse(line) else {
            tracing::debug!(line = line.trim_end(), "ignoring unrecognised command");
            return Ok(None);
        };

        match command {
            Command::Place { x, y, facing } => self.place(x, y, facing)?,
            Command::Move => self.move_forward(),
            Command::Turn(rotation) => self.rotate(rotation),
            Command::Report => return Ok(self.report()),
        }
        Ok(None)
    }

    /// Place the robot at `(x, y)` facing `facing`.
    ///
    /// Works from either state, replacing any earlier placement at once.
    /// Off-board coordinates fail with [`RobotError::OutOfBounds`] and leave
    /// the state unchanged.
    pub fn place(&mut self, x: i32, y: i32, facing: Direction) -> Result<(), RobotError> {
        let next = RobotState::placed(self.grid, x, y, facing)?;
        self.commit(Command::Place { x, y, facing }, next);
        Ok(())
    }

    /// Like [`place`](Self::place) with the direction given by name.
    ///
    /// Bounds are checked before the name, so an off-board point with a bad
    /// direction reports [`RobotError::OutOfBounds`].
    pub fn place_named(&mut self, x: i32, y: i32, facing: &str) -> Result<(), RobotError> {
        if !self.grid.within_bounds(x, y) {
            return Err(RobotError::OutOfBounds { x, y });
        }
        let facing: Direction = facing.parse()?;
        self.place(x, y, facing)
    }

    /// Step one cell forward.
    ///
    /// No-op when unplaced. A step that would leave the grid is discarded,
    /// not clamped.
    pub fn move_forward(&mut self) {
        if !self.is_placed() {
            return;
        }
        match self.state.advanced(self.grid) {
            Some(next) => self.commit(Command::Move, next),
            None => tracing::trace!(state = ?self.state, "move would leave the grid, ignored"),
        }
    }

    /// Quarter turn. No-op when unplaced.
    pub fn rotate(&mut self, rotation: Rotation) {
        if let Some(next) = self.state.turned(rotation) {
            self.commit(Command::Turn(rotation), next);
        }
    }

    /// Like [`rotate`](Self::rotate) with the rotation given by name.
    ///
    /// An unplaced robot ignores the call before the name is looked at, so
    /// it never fails. A placed robot fails with
    /// [`RobotError::UnknownRotation`] for anything but `LEFT` or `RIGHT`.
    pub fn rotate_named(&mut self, rotation: &str) -> Result<(), RobotError> {
        if !self.is_placed() {
            return Ok(());
        }
        let rotation: Rotation = rotation.parse()?;
        self.rotate(rotation);
        Ok(())
    }

    /// `x,y,FACING`, or `None` while unplaced.
    pub fn report(&self) -> Option<String> {
        self.state.report()
    }

    fn commit(&mut self, command: Command, next: RobotState) {
        tracing::debug!(
            command = %command,
            from = self.state.name(),
            to = ?next,
            "transition committed"
        );
        self.history.push(StateTransition {
            from: self.state,
            to: next,
            command: command.to_string(),
            timestamp: Utc::now(),
        });
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(5, 5).unwrap()
    }

    #[test]
    fn valid_place_is_reported() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        robot.place(4, 4, Direction::South).unwrap();
        assert_eq!(robot.report().as_deref(), Some("4,4,SOUTH"));
        assert!(robot.is_placed());
    }

    #[test]
    fn invalid_place_keeps_previous_placement() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        robot.place(1, 1, Direction::East).unwrap();

        assert_eq!(
            robot.place(5, 5, Direction::North),
            Err(RobotError::OutOfBounds { x: 5, y: 5 })
        );
        assert_eq!(
            robot.place_named(0, 0, "RANDOM"),
            Err(RobotError::UnknownDirection("RANDOM".into()))
        );
        assert_eq!(robot.report().as_deref(), Some("1,1,EAST"));
    }

    #[test]
    fn invalid_place_on_unplaced_robot_stays_unplaced() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        assert!(robot.place(-1, 0, Direction::North).is_err());
        assert!(!robot.is_placed());
        assert!(robot.history().is_empty());
    }

    #[test]
    fn place_named_checks_bounds_before_direction() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        assert_eq!(
            robot.place_named(9, 9, "UP"),
            Err(RobotError::OutOfBounds { x: 9, y: 9 })
        );
        robot.place_named(2, 3, "west").unwrap();
        assert_eq!(robot.report().as_deref(), Some("2,3,WEST"));
    }

    #[test]
    fn move_and_rotate_are_ignored_until_placed() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        robot.move_forward();
        robot.rotate(Rotation::Left);
        assert_eq!(robot.rotate_named("GARBAGE"), Ok(()));
        assert!(robot.report().is_none());
        assert_eq!(robot.state(), &RobotState::Unplaced);
    }

    #[test]
    fn rotate_named_rejects_unknown_rotation_when_placed() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        robot.place(2, 2, Direction::North).unwrap();
        assert_eq!(
            robot.rotate_named("UP"),
            Err(RobotError::UnknownRotation("UP".into()))
        );
        assert_eq!(
            robot.rotate_named("DOWN"),
            Err(RobotError::UnknownRotation("DOWN".into()))
        );
        assert_eq!(robot.report().as_deref(), Some("2,2,NORTH"));

        robot.rotate_named("right").unwrap();
        assert_eq!(robot.report().as_deref(), Some("2,2,EAST"));
    }

    #[test]
    fn move_at_edge_is_discarded() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        robot.place(2, 4, Direction::North).unwrap();
        robot.move_forward();
        assert_eq!(robot.report().as_deref(), Some("2,4,NORTH"));
        assert_eq!(robot.history().len(), 1);
    }

    #[test]
    fn execute_dispatches_commands() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        assert_eq!(robot.execute("PLACE 0,0,NORTH\n"), Ok(None));
        assert_eq!(robot.execute("MOVE\n"), Ok(None));
        assert_eq!(robot.execute("RIGHT\n"), Ok(None));
        assert_eq!(robot.execute("REPORT\n"), Ok(Some("0,1,EAST".to_string())));
    }

    #[test]
    fn execute_ignores_malformed_lines() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        robot.execute("PLACE 1,1,NORTH").unwrap();
        for line in ["PLACE 1,2", "JUMP", "", "PLACE 1,2,UP"] {
            assert_eq!(robot.execute(line), Ok(None));
        }
        assert_eq!(robot.report().as_deref(), Some("1,1,NORTH"));
    }

    #[test]
    fn execute_propagates_out_of_bounds_place() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        assert_eq!(
            robot.execute("PLACE 5,0,NORTH"),
            Err(RobotError::OutOfBounds { x: 5, y: 0 })
        );
        assert!(!robot.is_placed());
    }

    #[test]
    fn report_on_unplaced_robot_produces_nothing() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        assert_eq!(robot.execute("REPORT"), Ok(None));
    }

    #[test]
    fn history_records_committed_commands() {
        let grid = grid();
        let mut robot = Robot::new(&grid);
        for line in ["PLACE 0,0,SOUTH", "MOVE", "LEFT", "MOVE", "JUMP"] {
            robot.execute(line).unwrap();
        }
        let commands: Vec<&str> = robot
            .history()
            .transitions()
            .iter()
            .map(|t| t.command.as_str())
            .collect();
        assert_eq!(commands, vec!["PLACE 0,0,SOUTH", "LEFT", "MOVE"]);
        assert_eq!(robot.report().as_deref(), Some("1,0,EAST"));
    }

    #[test]
    fn robots_share_one_grid() {
        let grid = grid();
        let mut first = Robot::new(&grid);
        let mut second = Robot::new(&grid);
        first.place(0, 0, Direction::North).unwrap();
        second.place(4, 4, Direction::South).unwrap();
        assert_eq!(first.report().as_deref(), Some("0,0,NORTH"));
        assert_eq!(second.report().as_deref(), Some("4,4,SOUTH"));
    }
}
