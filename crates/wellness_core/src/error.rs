//! Error types for the wellness engine.
//!
//! The transforms themselves are total over their documented input
//! shapes; these variants only surface when a boundary parses free-form
//! input (sort keys from query strings, payloads a caller wants strict).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("unknown sort key: {0}")]
    InvalidSortKey(String),

    #[error("unknown sort direction: {0}")]
    InvalidSortDirection(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for engine operations.
pub type WellnessResult<T> = Result<T, WellnessError>;
