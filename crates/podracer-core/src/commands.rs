//! Commands emitted by the solver, one per tick.
//!
//! A `Move` carries independent flags; `Move::command` collapses them into the
//! single command the game accepts, with precedence boost > shield > thrust.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// The solver's decision for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub target: Position,
    /// Thrust in `[0, MAX_THRUST]`.
    pub thrust: u8,
    pub shield: bool,
    pub boost: bool,
}

/// What ends up in the command slot of the output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    Boost,
    Shield,
    Thrust { value: u8 },
}

impl Move {
    /// Safe default: aim at `target` and coast.
    pub fn coast(target: Position) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    pub fn command(&self) -> Command {
        if self.boost {
            Command::Boost
        } else if self.shield {
            Command::Shield
        } else {
            Command::Thrust { value: self.thrust }
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Boost => f.write_str("BOOST"),
            Command::Shield => f.write_str("SHIELD"),
            Command::Thrust { value } => write!(f, "{value}"),
        }
    }
}

/// Output line format: `<x> <y> <command>`, coordinates truncated to integers.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.target.x as i64,
            self.target.y as i64,
            self.command()
        )
    }
}
