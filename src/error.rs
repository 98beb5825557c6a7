//! Error types for habit-forge
//!
//! The scoring operations are total over well-formed histories and never
//! fail; these errors only surface at the boundaries where raw data enters
//! the crate (strict history parsing, JSON input, report encoding).

use thiserror::Error;

/// Errors that can occur at the engine's boundaries
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid completion date key: {0}")]
    InvalidDateKey(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}
