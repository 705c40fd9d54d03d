//! Checkpoint discovery, lap counting, and boost corridor selection.
//!
//! Checkpoints are learned in the order they are first aimed at; index 0 is
//! the start/finish line. Identity uses `Position::grid_key`, so readings of
//! the same checkpoint that differ by float noise still match.

use tracing::info;

use podracer_core::error::PodError;
use podracer_core::types::Position;

#[derive(Debug, Clone, Default)]
pub struct CheckpointTopology {
    checkpoints: Vec<Position>,
    laps: u32,
    aimed: Option<Position>,
    previous_aimed: Option<Position>,
    boost_candidate: Option<Position>,
}

impl CheckpointTopology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the checkpoint currently aimed at.
    pub fn update(&mut self, pos: Position) {
        match self.index_of(&pos) {
            None => {
                self.checkpoints.push(pos);
                info!(
                    index = self.checkpoints.len() - 1,
                    x = pos.x,
                    y = pos.y,
                    "checkpoint discovered"
                );
            }
            Some(0) if !self.is_aimed(&pos) => {
                self.laps += 1;
                info!(laps = self.laps, "lap completed");
                if self.boost_candidate.is_none() {
                    self.boost_candidate = self.longest_edge_end();
                    if let Some(c) = self.boost_candidate {
                        info!(x = c.x, y = c.y, "boost candidate selected");
                    }
                }
            }
            Some(_) => {}
        }

        if !self.is_aimed(&pos) {
            let canonical = self.index_of(&pos).map_or(pos, |i| self.checkpoints[i]);
            self.previous_aimed = self.aimed.replace(canonical);
        }
    }

    pub fn passed_first_lap(&self) -> bool {
        self.laps >= 1
    }

    pub fn laps(&self) -> u32 {
        self.laps
    }

    pub fn checkpoints(&self) -> &[Position] {
        &self.checkpoints
    }

    pub fn aimed(&self) -> Option<Position> {
        self.aimed
    }

    pub fn previous_aimed(&self) -> Option<Position> {
        self.previous_aimed
    }

    pub fn boost_candidate(&self) -> Option<Position> {
        self.boost_candidate
    }

    /// Checkpoint following `pos` around the cycle.
    pub fn next_checkpoint(&self, pos: &Position) -> Result<Position, PodError> {
        let index = self.index_of(pos).ok_or(PodError::UnknownCheckpoint)?;
        Ok(self.checkpoints[(index + 1) % self.checkpoints.len()])
    }

    pub fn is_boost_candidate(&self, pos: &Position) -> bool {
        self.boost_candidate
            .is_some_and(|c| c.grid_key() == pos.grid_key())
    }

    fn index_of(&self, pos: &Position) -> Option<usize> {
        let key = pos.grid_key();
        self.checkpoints.iter().position(|c| c.grid_key() == key)
    }

    fn is_aimed(&self, pos: &Position) -> bool {
        self.aimed.is_some_and(|a| a.grid_key() == pos.grid_key())
    }

    /// Destination of the longest edge in the cycle. Later ties win.
    fn longest_edge_end(&self) -> Option<Position> {
        let n = self.checkpoints.len();
        let mut best: Option<(f64, Position)> = None;
        for i in 0..n {
            let from = self.checkpoints[i];
            let to = self.checkpoints[(i + 1) % n];
            let dist2 = from.distance2_to(&to);
            if best.map_or(true, |(longest, _)| dist2 >= longest) {
                best = Some((dist2, to));
            }
        }
        best.map(|(_, to)| to)
    }
}
