//! Session error types.

use thiserror::Error;

use crate::MIN_PASSWORD_LEN;

/// Errors surfaced by session store operations.
///
/// Every failure is a deterministic validation outcome; the `Display` text
/// is the caller-facing reason. Nothing panics across the store boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Unknown email or wrong password. The two cases are deliberately
    /// indistinguishable so callers cannot probe which emails are
    /// registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Sign-up attempted with an email the directory already knows.
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    /// Sign-up password shorter than the minimum length.
    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    WeakPassword,

    /// Forgot-password for an email the directory does not know.
    #[error("No account found with this email")]
    AccountNotFound,

    /// The operation finished after a newer session change and was
    /// discarded without touching the state.
    #[error("Session changed while the request was in flight")]
    Superseded,
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
