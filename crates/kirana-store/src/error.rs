//! Store error types.

use thiserror::Error;

/// Errors from cart storage and sync.
///
/// None of these are fatal to cart operations; callers demote them to
/// warnings and keep the in-memory cart authoritative.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to serialize or deserialize a stored cart.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing store failed.
    #[error("Store operation failed: {0}")]
    Backend(String),

    /// Remote cart sync failed.
    #[error("Cart sync failed: {0}")]
    SyncFailed(String),
}
