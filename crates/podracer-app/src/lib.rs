//! Pod racing bot application.
//!
//! This crate wires the navigation core to the game's line protocol on
//! stdin/stdout. Diagnostics go to stderr.

pub mod game_loop;
pub mod input;
pub mod tuning;

pub use podracer_core as core;
