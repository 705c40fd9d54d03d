//! Initial route pool generation.
//!
//! The seed genome follows the checkpoints exactly. Each candidate clones it
//! and splits every long edge at a jittered midpoint. Candidates are starting
//! material for refinement; nothing here scores or selects them.

use rand::Rng;
use tracing::info;

use podracer_core::config::SeedConfig;
use podracer_core::error::PodError;
use podracer_core::types::{Angle, Position};

use crate::genome::{Gene, GenePool, Generations, Genome};

/// Produces the first generation of candidate routes, once per race.
#[derive(Debug, Clone, Default)]
pub struct RouteGenomeSeeder {
    config: SeedConfig,
    seed: Option<Genome>,
    generations: Generations,
}

impl RouteGenomeSeeder {
    pub fn new(config: SeedConfig) -> Self {
        Self {
            config,
            seed: None,
            generations: Generations::new(),
        }
    }

    pub fn is_seeded(&self) -> bool {
        !self.generations.is_empty()
    }

    /// Seed the pool from the checkpoint cycle. Later calls return the
    /// existing pool untouched.
    pub fn seed<R: Rng + ?Sized>(
        &mut self,
        checkpoints: &[Position],
        rng: &mut R,
    ) -> Result<&GenePool, PodError> {
        if !self.is_seeded() {
            let seed = seed_genome(checkpoints)?;
            let pool = (0..self.config.candidates)
                .map(|_| split_long_edges(&seed, &self.config, &mut *rng))
                .collect::<Result<GenePool, _>>()?;

            info!(
                checkpoints = seed.len(),
                candidates = pool.len(),
                "route genome pool seeded"
            );
            self.seed = Some(seed);
            self.generations.push(pool);
        }
        Ok(&self.generations[0])
    }

    pub fn seed_genome(&self) -> Option<&Genome> {
        self.seed.as_ref()
    }

    /// Latest pool, if seeding has run.
    pub fn pool(&self) -> Option<&GenePool> {
        self.generations.last()
    }

    pub fn generations(&self) -> &Generations {
        &self.generations
    }
}

/// One real gene per checkpoint, linked around the lap.
pub fn seed_genome(checkpoints: &[Position]) -> Result<Genome, PodError> {
    Genome::from_genes(checkpoints.iter().copied().map(Gene::checkpoint).collect())
}

/// Clone `seed`, inserting a synthetic waypoint on every edge longer than
/// `config.split_distance`.
///
/// The waypoint sits at the end of the half-edge vector rotated by a random
/// non-zero whole number of degrees in `[-max_jitter_deg, max_jitter_deg]`.
pub fn split_long_edges<R: Rng + ?Sized>(
    seed: &Genome,
    config: &SeedConfig,
    rng: &mut R,
) -> Result<Genome, PodError> {
    let threshold2 = config.split_distance * config.split_distance;
    let genes = seed.genes();
    let mut candidate = Vec::with_capacity(genes.len() * 2);

    for (i, gene) in genes.iter().enumerate() {
        candidate.push(*gene);
        if gene.dist2_to_next <= threshold2 {
            continue;
        }

        let next = genes[seed.next_index(i)].point;
        let half_edge = gene.point.vector_to(&next) / 2.0;
        let jitter = random_jitter(config.max_jitter_deg, &mut *rng);
        candidate.push(Gene::synthetic(gene.point.offset(jitter.rotate(half_edge))));
    }

    Genome::from_genes(candidate)
}

/// Non-zero whole-degree rotation, redrawn until it is non-zero.
fn random_jitter<R: Rng + ?Sized>(max_deg: i32, rng: &mut R) -> Angle {
    let bound = max_deg.abs().max(1);
    loop {
        let deg = rng.gen_range(-bound..=bound);
        if deg != 0 {
            return Angle::from_degrees(deg as f64);
        }
    }
}
