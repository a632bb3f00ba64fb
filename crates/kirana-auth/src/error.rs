//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// User already exists.
    #[error("An account already exists for {0}")]
    UserAlreadyExists(String),

    /// User not found.
    #[error("No account for {0}")]
    UserNotFound(String),

    /// Signup form incomplete.
    #[error("Please fill in all fields")]
    MissingFields,

    /// Password too weak.
    #[error("Password too weak: {0}")]
    WeakPassword(String),

    /// Session expired.
    #[error("Session expired")]
    SessionExpired,

    /// CSRF token mismatch.
    #[error("CSRF token mismatch")]
    CsrfMismatch,

    /// Account locked after repeated failures.
    #[error("Account locked, try again later")]
    AccountLocked,

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Check if this is an authentication failure.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidCredentials | AuthError::SessionExpired | AuthError::AccountLocked
        )
    }
}
