//! # AppError
//!
//! Centralized error handling for the fedi-board client core.
//! Only identity resolution and input parsing can fail; every state rule
//! over typed input is total.

use thiserror::Error;

/// The primary error type for all fb-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Caller passed a tag outside the recognized view types
    #[error("unknown domain tag: {0}")]
    UnknownDomainTag(String),

    /// An untyped view does not carry an integer id at its tag's path
    #[error("{tag} view has no integer id at `{path}`")]
    MissingIdentity { tag: String, path: String },

    /// Vote value outside {-1, 0, 1}
    #[error("invalid vote value: {0}")]
    InvalidVote(i64),

    /// Timestamp in none of the shapes the API emits
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// A specialized Result type for fedi-board logic.
pub type Result<T> = std::result::Result<T, AppError>;
