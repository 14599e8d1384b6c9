//! Parameter validation errors

use crate::float_types::Real;

/// All the parameter problems the host adapter rejects before building.
///
/// The core builder assumes valid parameters; these are raised by
/// [`RatchetParams::validate`](crate::ratchet::RatchetParams::validate).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (TooFewTeeth) A ring needs at least three teeth
    #[error("(TooFewTeeth) A ratchet needs at least {min} teeth, got {actual}")]
    TooFewTeeth { min: usize, actual: usize },
    /// (TooFewVerticesPerTooth) The tooth ramp needs at least one step
    #[error("(TooFewVerticesPerTooth) A tooth needs at least {min} vertices, got {actual}")]
    TooFewVerticesPerTooth { min: usize, actual: usize },
    /// (NegativeDimension) A length parameter is below zero
    #[error("(NegativeDimension) `{name}` must not be negative, got {value}")]
    NegativeDimension { name: &'static str, value: Real },
    /// (InvalidCoordinate) A length parameter is NaN or infinite
    #[error("(InvalidCoordinate) `{name}` ({value}) is NaN or infinite")]
    InvalidCoordinate { name: &'static str, value: Real },
}
