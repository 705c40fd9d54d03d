//! Navigation core for the pod racing controller.
//!
//! Tracks checkpoints and laps, steers under the per-tick turn cap, and
//! decides thrust, shield and boost. Completely headless: the caller feeds
//! observations and prints the resulting moves.

pub mod solver;
pub mod steering;
pub mod topology;

pub use podracer_core as core;
pub use solver::{NavigationSolver, Pilot};
pub use topology::CheckpointTopology;
