//! Enumeration types used throughout the navigation core.

use serde::{Deserialize, Serialize};

/// Behavioural regime of the solver. Transitions only move forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Regime {
    /// No observation received yet.
    #[default]
    NotStarted,
    /// First lap: steering straight off the checkpoint reading.
    Exploring,
    /// Full lap known: steering anticipates the following checkpoint.
    MapInformed,
}

impl Regime {
    /// Next regime given whether the first lap has been completed.
    pub fn advance(self, passed_first_lap: bool) -> Regime {
        match self {
            Regime::MapInformed => Regime::MapInformed,
            _ if passed_first_lap => Regime::MapInformed,
            _ => Regime::Exploring,
        }
    }
}

/// One-shot boost availability for a race.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoostState {
    #[default]
    Available,
    Used,
}
