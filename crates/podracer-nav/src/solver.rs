//! Navigation solver: turns one observation per tick into one `Move`.
//!
//! `NavigationSolver` owns all session state for a race: checkpoint topology,
//! the kinematic history, the regime, the one-shot boost, and the route
//! seeder with its RNG. Nothing is global, so a fresh solver is a fresh race.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use podracer_core::commands::Move;
use podracer_core::config::SolverConfig;
use podracer_core::enums::{BoostState, Regime};
use podracer_core::error::PodError;
use podracer_core::state::RaceSnapshot;
use podracer_core::types::{Angle, KinematicSample, Observation, Position};
use podracer_route::RouteGenomeSeeder;

use crate::steering::{self, BoostCheck};
use crate::topology::CheckpointTopology;

/// A per-tick controller: feed it an observation, then ask for a move.
pub trait Pilot {
    fn update(&mut self, obs: &Observation) -> Result<(), PodError>;
    fn decide(&mut self) -> Move;
}

pub struct NavigationSolver {
    config: SolverConfig,
    topology: CheckpointTopology,
    sample: Option<KinematicSample>,
    regime: Regime,
    boost: BoostState,
    seeder: RouteGenomeSeeder,
    seeding_attempted: bool,
    rng: ChaCha8Rng,
    tick: u64,
}

impl Default for NavigationSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl NavigationSolver {
    pub fn new(config: SolverConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Build a solver with an explicit route-seeding RNG.
    pub fn with_rng(config: SolverConfig, rng: ChaCha8Rng) -> Self {
        Self {
            seeder: RouteGenomeSeeder::new(config.seeding.clone()),
            config,
            topology: CheckpointTopology::new(),
            sample: None,
            regime: Regime::default(),
            boost: BoostState::default(),
            seeding_attempted: false,
            rng,
            tick: 0,
        }
    }

    /// Update with `obs` and decide, falling back to the safe move if the
    /// observation is rejected.
    pub fn step(&mut self, obs: &Observation) -> Move {
        match self.update(obs) {
            Ok(()) => self.decide(),
            Err(err) => {
                warn!(%err, "observation rejected");
                self.fallback_move()
            }
        }
    }

    /// Aim at the last known checkpoint and coast.
    pub fn fallback_move(&self) -> Move {
        let target = self
            .topology
            .aimed()
            .or(self.sample.map(|s| s.pod))
            .unwrap_or_default();
        Move::coast(target)
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn boost_state(&self) -> BoostState {
        self.boost
    }

    pub fn topology(&self) -> &CheckpointTopology {
        &self.topology
    }

    pub fn seeder(&self) -> &RouteGenomeSeeder {
        &self.seeder
    }

    pub fn sample(&self) -> Option<&KinematicSample> {
        self.sample.as_ref()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn snapshot(&self) -> RaceSnapshot {
        RaceSnapshot {
            tick: self.tick,
            regime: self.regime,
            boost: self.boost,
            laps: self.topology.laps(),
            checkpoints: self.topology.checkpoints().to_vec(),
            aimed: self.topology.aimed(),
            boost_candidate: self.topology.boost_candidate(),
            route_candidates: self.seeder.pool().map_or(0, |pool| pool.len()),
        }
    }

    fn try_decide(&mut self) -> Result<Move, PodError> {
        let sample = self.sample.ok_or(PodError::NoObservation)?;
        if self.regime == Regime::MapInformed && !self.seeding_attempted {
            self.seed_routes();
        }

        let max_turn = Angle::from_degrees(self.config.max_turn_deg);
        let (aim, projection, braking) = match self.regime {
            Regime::NotStarted | Regime::Exploring => {
                (sample.checkpoint, self.config.explore_projection, None)
            }
            Regime::MapInformed => (
                self.anticipated_aim(&sample)?,
                self.config.map_projection,
                self.config.braking_radius,
            ),
        };
        let target = steering::steer(&sample, aim, max_turn, projection)?;

        let mut mv = Move {
            target,
            thrust: steering::thrust(sample.checkpoint_angle, sample.checkpoint_distance, braking),
            shield: steering::should_shield(
                &sample,
                self.config.shield_damping,
                self.config.shield_range,
            ),
            boost: false,
        };

        let check = BoostCheck {
            available: self.boost == BoostState::Available,
            passed_first_lap: self.topology.passed_first_lap(),
            aiming_at_candidate: self.topology.is_boost_candidate(&sample.checkpoint),
            distance: sample.checkpoint_distance,
            angle_deg: sample.checkpoint_angle,
        };
        if check.ready(self.config.boost_min_distance, self.config.boost_max_angle_deg) {
            mv.boost = true;
            self.boost = BoostState::Used;
            info!(tick = self.tick, "boost fired");
        }

        Ok(mv)
    }

    fn anticipated_aim(&self, sample: &KinematicSample) -> Result<Position, PodError> {
        let next = self.topology.next_checkpoint(&sample.checkpoint)?;
        Ok(steering::anticipate(
            sample.checkpoint,
            next,
            sample.checkpoint_distance,
            self.config.anticipation_distance,
            self.config.anticipation_offset,
        ))
    }

    fn seed_routes(&mut self) {
        self.seeding_attempted = true;
        let checkpoints = self.topology.checkpoints().to_vec();
        if let Err(err) = self.seeder.seed(&checkpoints, &mut self.rng) {
            warn!(%err, "route seeding failed");
        }
    }
}

impl Pilot for NavigationSolver {
    fn update(&mut self, obs: &Observation) -> Result<(), PodError> {
        obs.validate()?;

        match self.sample.as_mut() {
            Some(sample) => sample.advance(obs),
            None => self.sample = Some(KinematicSample::first(obs)),
        }
        self.topology.update(obs.checkpoint);

        let regime = self.regime.advance(self.topology.passed_first_lap());
        if regime != self.regime {
            info!(from = ?self.regime, to = ?regime, tick = self.tick, "regime change");
            self.regime = regime;
        }
        self.tick += 1;
        Ok(())
    }

    fn decide(&mut self) -> Move {
        let mv = match self.try_decide() {
            Ok(mv) => mv,
            Err(err) => {
                warn!(%err, "falling back to safe move");
                self.fallback_move()
            }
        };
        debug!(
            x = mv.target.x,
            y = mv.target.y,
            thrust = mv.thrust,
            shield = mv.shield,
            boost = mv.boost,
            "move"
        );
        mv
    }
}
