//! Input validation failures.
//!
//! Lookups against absent words or prefixes are not errors; they yield
//! empty or negative results. Only missing required input fails.

use thiserror::Error;

/// Rejected input to a mutation or analysis entry point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Attempted to insert an empty word.
    #[error("word must not be empty")]
    EmptyWord,

    /// Attempted to analyze an empty or whitespace-only message.
    #[error("message must not be empty")]
    EmptyMessage,
}
