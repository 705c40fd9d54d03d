//! Tests for route genome seeding.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use podracer_core::config::SeedConfig;
use podracer_core::error::PodError;
use podracer_core::types::{Angle, Position};

use crate::seeder::{seed_genome, split_long_edges};
use crate::RouteGenomeSeeder;

fn square(side: f64) -> Vec<Position> {
    vec![
        Position::new(0.0, 0.0),
        Position::new(side, 0.0),
        Position::new(side, side),
        Position::new(0.0, side),
    ]
}

#[test]
fn test_seed_genome_follows_checkpoints() {
    let seed = seed_genome(&square(1000.0)).unwrap();
    assert_eq!(seed.len(), 4);
    assert_eq!(seed.synthetic_count(), 0);
    for gene in seed.genes() {
        assert_eq!(gene.dist2_to_next, 1_000_000.0);
        // Counter-clockwise square: every corner is a +90° turn
        assert!((gene.turn.to_degrees() - 90.0).abs() < 1e-9);
    }
}

#[test]
fn test_square_1000_gets_one_waypoint_per_edge() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut seeder = RouteGenomeSeeder::new(SeedConfig::default());
    let pool = seeder.seed(&square(1000.0), &mut rng).unwrap();

    assert_eq!(pool.len(), 6);
    for genome in pool {
        assert_eq!(genome.len(), 8, "4-gene seed should become 8 genes");
        assert_eq!(genome.synthetic_count(), 4);
        // Real and synthetic genes alternate
        for (i, gene) in genome.genes().iter().enumerate() {
            assert_eq!(gene.synthetic, i % 2 == 1);
        }
    }
}

#[test]
fn test_short_edges_are_not_split() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let seed = seed_genome(&square(500.0)).unwrap();
    let candidate = split_long_edges(&seed, &SeedConfig::default(), &mut rng).unwrap();
    assert_eq!(candidate, seed);
}

#[test]
fn test_synthetic_waypoint_is_jittered_half_edge() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let seed = seed_genome(&square(1000.0)).unwrap();
    let config = SeedConfig::default();

    for _ in 0..20 {
        let candidate = split_long_edges(&seed, &config, &mut rng).unwrap();
        let genes = candidate.genes();
        for i in (0..genes.len()).step_by(2) {
            let from = genes[i].point;
            let mid = genes[i + 1].point;
            let to = genes[(i + 2) % genes.len()].point;

            // Rotation preserves the half-edge length
            assert!((from.distance_to(&mid) - 500.0).abs() < 1e-6);
            assert!((genes[i].dist2_to_next - 250_000.0).abs() < 1e-6);

            let jitter = Angle::between(from.vector_to(&to), from.vector_to(&mid))
                .unwrap()
                .to_degrees();
            assert!(jitter.abs() >= 1.0 - 1e-9, "jitter must be non-zero: {jitter}");
            assert!(jitter.abs() <= 18.0 + 1e-9, "jitter out of range: {jitter}");
            assert!((jitter - jitter.round()).abs() < 1e-6, "jitter should be whole degrees");
        }
    }
}

#[test]
fn test_zero_jitter_bound_still_jitters_one_degree() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let seed = seed_genome(&square(1000.0)).unwrap();
    let config = SeedConfig {
        max_jitter_deg: 0,
        ..SeedConfig::default()
    };

    let candidate = split_long_edges(&seed, &config, &mut rng).unwrap();
    let genes = candidate.genes();
    for i in (0..genes.len()).step_by(2) {
        let from = genes[i].point;
        let to = genes[(i + 2) % genes.len()].point;
        let jitter = Angle::between(from.vector_to(&to), from.vector_to(&genes[i + 1].point))
            .unwrap()
            .to_degrees();
        assert!((jitter.abs() - 1.0).abs() < 1e-6, "expected ±1°, got {jitter}");
    }
}

#[test]
fn test_split_links_are_recomputed() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let seed = seed_genome(&square(1000.0)).unwrap();
    let candidate = split_long_edges(&seed, &SeedConfig::default(), &mut rng).unwrap();
    let genes = candidate.genes();

    for i in 0..genes.len() {
        let next = genes[candidate.next_index(i)].point;
        let expected = genes[i].point.distance2_to(&next);
        assert!((genes[i].dist2_to_next - expected).abs() < 1e-6);
    }
}

#[test]
fn test_seeding_runs_once() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut seeder = RouteGenomeSeeder::new(SeedConfig::default());
    assert!(!seeder.is_seeded());

    let first = seeder.seed(&square(1000.0), &mut rng).unwrap().clone();
    let again = seeder.seed(&square(2000.0), &mut rng).unwrap().clone();

    assert!(seeder.is_seeded());
    assert_eq!(first, again);
    assert_eq!(seeder.generations().len(), 1);
    assert_eq!(seeder.seed_genome().map(|g| g.len()), Some(4));
    assert_eq!(seeder.pool(), Some(&first));
}

#[test]
fn test_same_seed_same_pool() {
    let mut a = RouteGenomeSeeder::new(SeedConfig::default());
    let mut b = RouteGenomeSeeder::new(SeedConfig::default());
    let pool_a = a
        .seed(&square(3000.0), &mut ChaCha8Rng::seed_from_u64(12345))
        .unwrap()
        .clone();
    let pool_b = b
        .seed(&square(3000.0), &mut ChaCha8Rng::seed_from_u64(12345))
        .unwrap()
        .clone();
    assert_eq!(pool_a, pool_b);
}

#[test]
fn test_candidate_count_is_configurable() {
    let mut seeder = RouteGenomeSeeder::new(SeedConfig {
        candidates: 2,
        ..SeedConfig::default()
    });
    let pool = seeder
        .seed(&square(1000.0), &mut ChaCha8Rng::seed_from_u64(5))
        .unwrap();
    assert_eq!(pool.len(), 2);
}

#[test]
fn test_seeding_without_checkpoints_fails() {
    let mut seeder = RouteGenomeSeeder::new(SeedConfig::default());
    let err = seeder
        .seed(&[], &mut ChaCha8Rng::seed_from_u64(5))
        .unwrap_err();
    assert_eq!(err, PodError::EmptyGenome);
    assert!(!seeder.is_seeded());

    let err = seed_genome(&[Position::new(1.0, 1.0)]).unwrap_err();
    assert!(matches!(err, PodError::DegenerateVector(_)));
}
