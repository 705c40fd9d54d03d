//! Racing constants and tuning parameters.

// --- Thrust ---

/// Highest regular thrust value.
pub const MAX_THRUST: u8 = 100;

/// Heading error (degrees) under which thrust is always maximal.
pub const FULL_THRUST_ANGLE_DEG: f64 = 1.0;

/// Heading error (degrees) at or above which thrust is cut to zero.
pub const ZERO_THRUST_ANGLE_DEG: f64 = 90.0;

// --- Steering ---

/// Maximum rotation a pod can perform in one tick (degrees).
pub const MAX_TURN_DEG: f64 = 18.0;

/// Aim-point distance when the turn is capped, before the map is known.
pub const EXPLORE_PROJECTION: f64 = 100.0;

/// Aim-point distance when the turn is capped, once the map is known.
pub const MAP_PROJECTION: f64 = 1000.0;

// --- Circuit ---

/// Radius of a checkpoint (game units).
pub const CHECKPOINT_RADIUS: f64 = 600.0;

/// Thrust easing radius around the aimed checkpoint (map-informed regime).
pub const BRAKING_RADIUS: f64 = CHECKPOINT_RADIUS * 4.0;

/// Distance under which the aim point starts sliding toward the following checkpoint.
pub const ANTICIPATION_DISTANCE: f64 = CHECKPOINT_RADIUS * 3.0;

/// Largest shift of the aim point toward the following checkpoint.
pub const ANTICIPATION_OFFSET: f64 = CHECKPOINT_RADIUS / 2.0;

// --- Shield ---

/// Collision radius of a pod.
pub const POD_RADIUS: f64 = 400.0;

/// Extrapolated pod separation at or below which the shield is raised.
/// Bounding-box approximation, not an exact circle test.
pub const SHIELD_RANGE: f64 = POD_RADIUS * 2.0;

/// Fraction of last tick's displacement used to extrapolate both pods.
pub const SHIELD_DAMPING: f64 = 0.85;

// --- Boost ---

/// Minimum distance to the aimed checkpoint for a boost.
pub const BOOST_MIN_DISTANCE: f64 = 7000.0;

/// Maximum heading error (degrees) for a boost.
pub const BOOST_MAX_ANGLE_DEG: f64 = 2.0;

// --- Route seeding ---

/// Candidate genomes generated per seeding.
pub const GENOME_CANDIDATES: usize = 6;

/// Edges longer than this get a synthetic midpoint waypoint.
pub const SPLIT_DISTANCE: f64 = 800.0;

/// Bound (degrees) for the random rotation applied to a split midpoint.
pub const MAX_JITTER_DEG: i32 = 18;
