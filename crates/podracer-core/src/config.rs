//! Tunable parameters for a race session.
//!
//! Defaults come from `constants`. Both structs deserialize with
//! `#[serde(default)]`, so a tuning file only needs the fields it overrides.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Configuration for a `NavigationSolver`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// RNG seed for route seeding. `None` draws one from entropy.
    pub seed: Option<u64>,
    pub max_turn_deg: f64,
    pub explore_projection: f64,
    pub map_projection: f64,
    /// Thrust easing radius in the map-informed regime. `None` disables easing.
    pub braking_radius: Option<f64>,
    pub anticipation_distance: f64,
    pub anticipation_offset: f64,
    pub shield_range: f64,
    pub shield_damping: f64,
    pub boost_min_distance: f64,
    pub boost_max_angle_deg: f64,
    pub seeding: SeedConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_turn_deg: MAX_TURN_DEG,
            explore_projection: EXPLORE_PROJECTION,
            map_projection: MAP_PROJECTION,
            braking_radius: Some(BRAKING_RADIUS),
            anticipation_distance: ANTICIPATION_DISTANCE,
            anticipation_offset: ANTICIPATION_OFFSET,
            shield_range: SHIELD_RANGE,
            shield_damping: SHIELD_DAMPING,
            boost_min_distance: BOOST_MIN_DISTANCE,
            boost_max_angle_deg: BOOST_MAX_ANGLE_DEG,
            seeding: SeedConfig::default(),
        }
    }
}

/// Configuration for route genome seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub candidates: usize,
    /// Edges with squared length above `split_distance²` are split.
    pub split_distance: f64,
    /// Synthetic waypoints rotate by a non-zero whole degree in
    /// `[-max_jitter_deg, max_jitter_deg]`. Zero is treated as 1, since a
    /// waypoint always gets some jitter.
    pub max_jitter_deg: i32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            candidates: GENOME_CANDIDATES,
            split_distance: SPLIT_DISTANCE,
            max_jitter_deg: MAX_JITTER_DEG,
        }
    }
}
