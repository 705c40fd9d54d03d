//! Error conditions raised by the navigation core.
//!
//! Every condition is local to a single tick. The solver converts them into a
//! safe fallback move rather than letting them escape the control loop.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PodError {
    /// A per-tick input field is missing, non-numeric, or non-finite.
    #[error("malformed observation field `{field}`: {reason}")]
    MalformedObservation { field: &'static str, reason: String },

    /// A zero-length vector reached normalization or angle measurement.
    #[error("degenerate vector: zero-length {0}")]
    DegenerateVector(&'static str),

    /// A checkpoint lookup ran before that checkpoint was discovered.
    #[error("checkpoint not discovered yet")]
    UnknownCheckpoint,

    /// A move was requested before any observation arrived.
    #[error("no observation received yet")]
    NoObservation,

    /// A route genome needs at least one gene.
    #[error("route genome has no genes")]
    EmptyGenome,
}
