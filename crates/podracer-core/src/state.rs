//! Race state snapshot, produced on demand for diagnostics.

use serde::{Deserialize, Serialize};

use crate::enums::{BoostState, Regime};
use crate::types::Position;

/// Summary of a solver's session state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceSnapshot {
    pub tick: u64,
    pub regime: Regime,
    pub boost: BoostState,
    pub laps: u32,
    pub checkpoints: Vec<Position>,
    pub aimed: Option<Position>,
    pub boost_candidate: Option<Position>,
    /// Candidate routes generated so far (0 until seeded).
    pub route_candidates: usize,
}
