//! Kinematics error types.

/// Errors raised when kinematic inputs violate their domain.
///
/// Inputs are normally internal constants, so these indicate a bad scene
/// configuration and should surface during initialisation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KinematicsError {
    /// An orbital radius was negative.
    #[error("orbital radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    /// A quantity that must be finite was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Which input was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A value fell outside its allowed interval.
    #[error("{name} out of range: {value}")]
    OutOfRange {
        /// Which input was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Elapsed time went backwards.
    #[error("elapsed time must be non-negative, got {0}")]
    NegativeDelta(f64),

    /// A speed multiplier was negative.
    #[error("speed multiplier must be non-negative, got {0}")]
    NegativeMultiplier(f64),

    /// A classification table had no entries.
    #[error("classification table must contain at least one entry")]
    EmptyTable,

    /// A body id was not found in the system.
    #[error("unknown body: {0}")]
    UnknownBody(String),

    /// Two bodies share the same id.
    #[error("duplicate body id: {0}")]
    DuplicateBody(String),

    /// Parent links form a cycle.
    #[error("parent chain of body {0} forms a cycle")]
    ParentCycle(String),
}

/// Reject NaN and infinities with a named error.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, KinematicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinematicsError::NonFinite { name, value })
    }
}
