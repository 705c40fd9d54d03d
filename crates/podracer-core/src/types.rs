//! Fundamental geometric and per-tick observation types.

use std::ops::Neg;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::PodError;

/// 2D position on the circuit (game units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Quantized checkpoint identity: coordinates rounded to the nearest unit.
pub type GridKey = (i64, i64);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.distance2_to(other).sqrt()
    }

    /// Squared distance to another position.
    pub fn distance2_to(&self, other: &Position) -> f64 {
        (other.as_vec() - self.as_vec()).length_squared()
    }

    /// Vector from `self` to `other`.
    pub fn vector_to(&self, other: &Position) -> DVec2 {
        other.as_vec() - self.as_vec()
    }

    /// Position displaced by `offset`.
    pub fn offset(&self, offset: DVec2) -> Position {
        (self.as_vec() + offset).into()
    }

    /// Identity key used to recognise a previously seen checkpoint.
    pub fn grid_key(&self) -> GridKey {
        (self.x.round() as i64, self.y.round() as i64)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Signed rotation, stored in radians. Positive is counter-clockwise in a
/// right-handed frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn to_degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    pub fn to_radians(self) -> f64 {
        self.radians
    }

    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    pub fn tan(self) -> f64 {
        self.radians.tan()
    }

    pub fn abs(self) -> Self {
        Self::from_radians(self.radians.abs())
    }

    /// Clamp to `[-limit, limit]`.
    pub fn clamp_magnitude(self, limit: Angle) -> Self {
        let limit = limit.radians.abs();
        Self::from_radians(self.radians.clamp(-limit, limit))
    }

    /// Signed angle that rotates `from` onto `to`, in `(-π, π]`.
    ///
    /// Fails with `DegenerateVector` if either vector has zero length.
    pub fn between(from: DVec2, to: DVec2) -> Result<Angle, PodError> {
        if from.length_squared() == 0.0 || to.length_squared() == 0.0 {
            return Err(PodError::DegenerateVector("angle operand"));
        }
        Ok(Self::from_radians(from.perp_dot(to).atan2(from.dot(to))))
    }

    /// Rotate a vector by this angle.
    pub fn rotate(self, v: DVec2) -> DVec2 {
        DVec2::from_angle(self.radians).rotate(v)
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

/// One tick of raw input, as read by the I/O collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub pod: Position,
    pub checkpoint: Position,
    /// Reported distance to the aimed checkpoint.
    pub checkpoint_distance: f64,
    /// Signed heading error to the aimed checkpoint (degrees).
    pub checkpoint_angle: f64,
    pub opponent: Position,
}

impl Observation {
    /// Reject observations carrying non-finite values.
    pub fn validate(&self) -> Result<(), PodError> {
        let fields = [
            ("pod", self.pod.is_finite()),
            ("checkpoint", self.checkpoint.is_finite()),
            ("checkpoint_distance", self.checkpoint_distance.is_finite()),
            ("checkpoint_angle", self.checkpoint_angle.is_finite()),
            ("opponent", self.opponent.is_finite()),
        ];
        match fields.iter().find(|(_, ok)| !ok) {
            Some((field, _)) => Err(PodError::MalformedObservation {
                field: *field,
                reason: "non-finite value".into(),
            }),
            None => Ok(()),
        }
    }
}

/// Kinematic state kept by the solver: the latest observation plus the
/// positions from exactly one tick earlier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicSample {
    pub pod: Position,
    pub prev_pod: Option<Position>,
    pub opponent: Position,
    pub prev_opponent: Option<Position>,
    pub checkpoint: Position,
    pub checkpoint_distance: f64,
    pub checkpoint_angle: f64,
}

impl KinematicSample {
    /// Build the first sample of a race. No history is available yet.
    pub fn first(obs: &Observation) -> Self {
        Self {
            pod: obs.pod,
            prev_pod: None,
            opponent: obs.opponent,
            prev_opponent: None,
            checkpoint: obs.checkpoint,
            checkpoint_distance: obs.checkpoint_distance,
            checkpoint_angle: obs.checkpoint_angle,
        }
    }

    /// Shift current positions into the history slot and take in `obs`.
    pub fn advance(&mut self, obs: &Observation) {
        self.prev_pod = Some(self.pod);
        self.prev_opponent = Some(self.opponent);
        self.pod = obs.pod;
        self.opponent = obs.opponent;
        self.checkpoint = obs.checkpoint;
        self.checkpoint_distance = obs.checkpoint_distance;
        self.checkpoint_angle = obs.checkpoint_angle;
    }

    /// Displacement of the controlled pod over the last tick.
    pub fn pod_velocity(&self) -> DVec2 {
        self.prev_pod
            .map(|prev| prev.vector_to(&self.pod))
            .unwrap_or(DVec2::ZERO)
    }

    /// Displacement of the opponent over the last tick, if known.
    pub fn opponent_velocity(&self) -> Option<DVec2> {
        self.prev_opponent.map(|prev| prev.vector_to(&self.opponent))
    }
}
