//! Error types for workout calculations

use thiserror::Error;

use crate::dispatch::WorkoutKind;

/// Result alias for workout operations
pub type WorkoutResult<T> = Result<T, WorkoutError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    /// Type code is not one of RUN, WLK, SWM
    #[error("unknown workout kind: '{0}'")]
    UnknownWorkoutKind(String),

    /// Field count does not match the constructor of the kind
    #[error("arity mismatch for {kind}: expected {expected} fields, got {got}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },

    /// A divisor field (duration, height) is zero
    #[error("division by zero: '{field}' must not be 0")]
    DivisionByZero { field: &'static str },

    #[error("invalid value for '{field}': {value} ({reason})")]
    InvalidField {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}
