//! Error types for the stride_core library.

use crate::WorkoutKind;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for stride_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout type code is not one of the known codes
    #[error("Unknown workout type: {0:?}")]
    UnknownWorkoutType(String),

    /// Package data does not match the constructor arity of the workout
    #[error("{kind} takes {expected} arguments, got {actual}")]
    ArgumentCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// A package value cannot be used for the field it maps to
    #[error("Invalid value for {field}: {value}")]
    InvalidArgument { field: &'static str, value: f64 },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// One or more packages in a batch could not be read
    #[error("{failed} of {total} packages failed")]
    BatchFailed { failed: usize, total: usize },

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
