//! Roster error types.

use thiserror::Error;

/// Errors that can occur during roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No roster entry with the given id.
    #[error("No roster user with id {0}")]
    NotFound(String),

    /// An entry with this email (case-insensitively) already exists.
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),
}

/// Result type for roster operations.
pub type RosterResult<T> = Result<T, RosterError>;
