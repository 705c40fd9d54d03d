//! Candidate racing lines.
//!
//! A `Genome` is one closed lap route made of `Gene` waypoints. Pools and
//! generations are the substrate for route refinement, which is not built
//! yet: only the initial pool is ever produced.

use podracer_core::error::PodError;
use podracer_core::types::{Angle, Position};

/// One waypoint of a candidate route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gene {
    pub point: Position,
    /// Signed turn from the incoming edge onto the outgoing edge.
    pub turn: Angle,
    /// Squared length of the outgoing edge.
    pub dist2_to_next: f64,
    /// Inserted waypoint rather than a race checkpoint.
    pub synthetic: bool,
}

impl Gene {
    pub fn checkpoint(point: Position) -> Self {
        Self {
            point,
            turn: Angle::ZERO,
            dist2_to_next: 0.0,
            synthetic: false,
        }
    }

    pub fn synthetic(point: Position) -> Self {
        Self {
            synthetic: true,
            ..Self::checkpoint(point)
        }
    }
}

/// An ordered, cyclic sequence of waypoints forming one lap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Genome {
    genes: Vec<Gene>,
}

/// A batch of candidate genomes.
pub type GenePool = Vec<Genome>;

/// History of pools, oldest first.
pub type Generations = Vec<GenePool>;

impl Genome {
    /// Build a genome from waypoints and compute every turn and edge length.
    pub fn from_genes(genes: Vec<Gene>) -> Result<Self, PodError> {
        let mut genome = Self { genes };
        genome.relink()?;
        Ok(genome)
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn synthetic_count(&self) -> usize {
        self.genes.iter().filter(|g| g.synthetic).count()
    }

    /// Gene following index `i` around the lap.
    pub fn next_index(&self, i: usize) -> usize {
        (i + 1) % self.genes.len()
    }

    /// Recompute `turn` and `dist2_to_next` for every gene from its neighbours.
    fn relink(&mut self) -> Result<(), PodError> {
        let n = self.genes.len();
        if n == 0 {
            return Err(PodError::EmptyGenome);
        }
        for i in 0..n {
            let prev = self.genes[(i + n - 1) % n].point;
            let here = self.genes[i].point;
            let next = self.genes[(i + 1) % n].point;

            let incoming = prev.vector_to(&here);
            let outgoing = here.vector_to(&next);
            self.genes[i].turn = Angle::between(incoming, outgoing)?;
            self.genes[i].dist2_to_next = outgoing.length_squared();
        }
        Ok(())
    }
}
