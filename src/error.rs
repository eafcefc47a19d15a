//! Error types for question extraction and storage

use thiserror::Error;

/// Why a field of the report could not be turned into a question
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The value is present but carries nothing to ask about (null, empty, no layers)
    #[error("Unusable data at `{path}`: {reason}")]
    UnusableData { path: String, reason: String },

    /// A key is absent somewhere along the path
    #[error("Field not found: `{path}`")]
    FieldNotFound { path: String },

    /// A container was expected but something else was found
    #[error("Malformed data at `{path}`: expected {expected}, found {found}")]
    MalformedShape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ExtractError {
    pub fn unusable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ExtractError::UnusableData {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Dotted path of the navigation step that failed
    pub fn path(&self) -> &str {
        match self {
            ExtractError::UnusableData { path, .. }
            | ExtractError::FieldNotFound { path }
            | ExtractError::MalformedShape { path, .. } => path,
        }
    }
}

/// Failures raised by an answer/question store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Unknown question category: {0}")]
    UnknownCategory(String),
}

/// What a single question generator can fail with
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type StoreResult<T> = Result<T, StoreError>;
