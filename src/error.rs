use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Validation errors raised by the program entity
// =============================================================================

/// A field value rejected by [`EducationalProgram`](crate::EducationalProgram).
///
/// Each variant corresponds to one independent check; nothing is
/// cross-validated between fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duration must be positive (got {weeks})")]
    NonPositiveDuration { weeks: i32 },

    #[error("difficulty must not be empty")]
    EmptyDifficulty,

    #[error("subject name must not be empty")]
    EmptySubject,
}

impl ValidationError {
    /// Short human-readable reason, without the offending value.
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::NonPositiveDuration { .. } => "duration must be positive",
            ValidationError::EmptyDifficulty => "difficulty must not be empty",
            ValidationError::EmptySubject => "subject name must not be empty",
        }
    }
}

// =============================================================================
// Application errors surfaced by the command-line front end
// =============================================================================

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load config '{}': {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid program: {0}")]
    Validation(#[from] ValidationError),
}

impl AppError {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
