//! Command grammar.
//!
//! A line is upper-cased (ASCII only) and then must match one of:
//!
//! ```text
//! LEFT | RIGHT | MOVE | REPORT
//! PLACE <x>,<y>,<NORTH|EAST|SOUTH|WEST>
//! ```
//!
//! `<x>` and `<y>` are unsigned decimal literals. A single optional space or
//! tab may follow `PLACE` and sit on either side of each comma. One trailing
//! `\n` or `\r\n` is accepted. Anything else does not parse.

use crate::core::{Direction, Rotation};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static COMMAND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\A(?:",
        r"(?P<bare>LEFT|RIGHT|MOVE|REPORT)",
        r"|PLACE[ \t]?(?P<x>[0-9]+)[ \t]?,[ \t]?(?P<y>[0-9]+)[ \t]?,[ \t]?",
        r"(?P<facing>NORTH|EAST|SOUTH|WEST)",
        r")(?:\r?\n)?\z",
    ))
    .unwrap()
});

/// One parsed command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Place { x: i32, y: i32, facing: Direction },
    Move,
    Turn(Rotation),
    Report,
}

impl Command {
    /// Parse one raw line.
    ///
    /// Returns `None` for anything outside the grammar: empty lines,
    /// unknown methods, malformed `PLACE` arguments, trailing text, or
    /// coordinates too large for `i32`. Callers treat `None` as a silent
    /// no-op rather than an error.
    ///
    /// ```rust
    /// use toy_robot::command::Command;
    /// use toy_robot::core::Direction;
    ///
    /// assert_eq!(
    ///     Command::parse("place 1, 2, north\n"),
    ///     Some(Command::Place { x: 1, y: 2, facing: Direction::North })
    /// );
    /// assert_eq!(Command::parse("PLACE 1,2"), None);
    /// assert_eq!(Command::parse("JUMP"), None);
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let upper = line.to_ascii_uppercase();
        let caps = COMMAND_REGEX.captures(&upper)?;

        if let Some(bare) = caps.name("bare") {
            return match bare.as_str() {
                "MOVE" => Some(Self::Move),
                "REPORT" => Some(Self::Report),
                turn => turn.parse().ok().map(Self::Turn),
            };
        }

        Some(Self::Place {
            x: caps.name("x")?.as_str().parse().ok()?,
            y: caps.name("y")?.as_str().parse().ok()?,
            facing: caps.name("facing")?.as_str().parse().ok()?,
        })
    }

    /// Method keyword of this command.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Place { .. } => "PLACE",
            Self::Move => "MOVE",
            Self::Turn(rotation) => rotation.name(),
            Self::Report => "REPORT",
        }
    }
}

impl fmt::Display for Command {
    /// Canonical command text, e.g. `PLACE 1,2,EAST`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { x, y, facing } => write!(f, "PLACE {x},{y},{facing}"),
            other => f.write_str(other.method()),
        }
    }
}
