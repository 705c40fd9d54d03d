//! Steering and throttle laws.
//!
//! Pure functions over plain data: heading recovery from the checkpoint
//! reading, turn-capped aim points, the thrust law, and the shield and boost
//! predicates. The solver composes these each tick.

use glam::DVec2;

use podracer_core::constants::*;
use podracer_core::error::PodError;
use podracer_core::types::{Angle, KinematicSample, Position};

/// Recover the pod's heading (unit vector) from the checkpoint reading.
///
/// The game reports the signed angle from the heading to the checkpoint, so
/// rotating the pod-to-checkpoint direction back by that angle gives the heading.
pub fn recover_heading(
    pod: Position,
    checkpoint: Position,
    reported: Angle,
) -> Result<DVec2, PodError> {
    let desired = pod
        .vector_to(&checkpoint)
        .try_normalize()
        .ok_or(PodError::DegenerateVector("pod-to-checkpoint"))?;
    Ok((-reported).rotate(desired))
}

/// Aim point for this tick.
///
/// If `aim` lies within `max_turn` of the current heading the pod aims
/// straight at it. Otherwise the heading is rotated by the capped error and
/// the aim point is projected `projection` units along it, so the pod never
/// chases a target it cannot turn onto in one tick.
pub fn steer(
    sample: &KinematicSample,
    aim: Position,
    max_turn: Angle,
    projection: f64,
) -> Result<Position, PodError> {
    let reported = Angle::from_degrees(sample.checkpoint_angle);
    let aiming_at_checkpoint = aim == sample.checkpoint;
    if aiming_at_checkpoint && reported.abs() < max_turn {
        return Ok(aim);
    }

    let heading = recover_heading(sample.pod, sample.checkpoint, reported)?;
    let error = if aiming_at_checkpoint {
        reported
    } else {
        Angle::between(heading, sample.pod.vector_to(&aim))?
    };
    if error.abs() < max_turn {
        return Ok(aim);
    }

    let turn = error.clamp_magnitude(max_turn);
    Ok(sample.pod.offset(turn.rotate(heading) * projection))
}

/// Slide the aim point from `checkpoint` toward `next` as the pod closes in.
///
/// The shift grows linearly from zero at `within` to `offset` at the checkpoint.
pub fn anticipate(
    checkpoint: Position,
    next: Position,
    distance: f64,
    within: f64,
    offset: f64,
) -> Position {
    if distance >= within || within <= 0.0 {
        return checkpoint;
    }
    match checkpoint.vector_to(&next).try_normalize() {
        Some(dir) => {
            let shift = offset * (1.0 - distance / within).clamp(0.0, 1.0);
            checkpoint.offset(dir * shift)
        }
        None => checkpoint,
    }
}

/// Thrust for a heading error (degrees) at `distance` from the checkpoint.
///
/// Full thrust under `FULL_THRUST_ANGLE_DEG`, none from `ZERO_THRUST_ANGLE_DEG`,
/// linear in between. With `braking_radius`, thrust is further scaled by
/// `distance / braking_radius` inside that radius.
pub fn thrust(angle_deg: f64, distance: f64, braking_radius: Option<f64>) -> u8 {
    let a = angle_deg.abs();
    if a < FULL_THRUST_ANGLE_DEG {
        return MAX_THRUST;
    }
    if a >= ZERO_THRUST_ANGLE_DEG {
        return 0;
    }

    let angle_coef = 1.0 - (a / ZERO_THRUST_ANGLE_DEG).clamp(0.0, 1.0);
    let distance_coef = match braking_radius {
        Some(radius) if radius > 0.0 => (distance / radius).clamp(0.0, 1.0),
        _ => 1.0,
    };
    (MAX_THRUST as f64 * angle_coef * distance_coef).round() as u8
}

/// Raise the shield if both pods, extrapolated by `damping` times last
/// tick's displacement, end up within `range` of each other.
///
/// Needs the opponent's previous position, so it never fires on the first tick.
pub fn should_shield(sample: &KinematicSample, damping: f64, range: f64) -> bool {
    let Some(opponent_vel) = sample.opponent_velocity() else {
        return false;
    };
    let future_opponent = sample.opponent.offset(opponent_vel * damping);
    let future_pod = sample.pod.offset(sample.pod_velocity() * damping);
    future_pod.distance2_to(&future_opponent) <= range * range
}

/// Preconditions for firing the one-shot boost.
#[derive(Debug, Clone, Copy)]
pub struct BoostCheck {
    pub available: bool,
    pub passed_first_lap: bool,
    pub aiming_at_candidate: bool,
    pub distance: f64,
    pub angle_deg: f64,
}

impl BoostCheck {
    pub fn ready(&self, min_distance: f64, max_angle_deg: f64) -> bool {
        self.available
            && self.passed_first_lap
            && self.distance > min_distance
            && self.angle_deg.abs() < max_angle_deg
            && self.aiming_at_candidate
    }
}
