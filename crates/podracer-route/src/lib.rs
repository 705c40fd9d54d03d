//! Alternative racing line generation.
//!
//! Turns the discovered checkpoint cycle into a pool of candidate routes
//! (genomes of waypoints) for later refinement.

pub mod genome;
pub mod seeder;

pub use genome::{Gene, GenePool, Generations, Genome};
pub use podracer_core as core;
pub use seeder::RouteGenomeSeeder;

#[cfg(test)]
mod tests;
