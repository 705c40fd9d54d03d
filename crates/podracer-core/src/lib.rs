//! Core types and definitions for the pod racing controller.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, observations, moves, configuration, errors, and constants.
//! It performs no I/O.

pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
