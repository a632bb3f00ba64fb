//! Accounts for the Kirana storefront.
//!
//! Provides password hashing, session management, user profiles with a
//! saved address book, and an in-memory account directory with login
//! lockout.

mod directory;
mod error;
mod password;
mod session;
mod user;

pub use directory::{AccountDirectory, LOCKOUT_DURATION_SECS, MAX_FAILED_ATTEMPTS};
pub use error::AuthError;
pub use password::PasswordHasher;
pub use session::AuthSession;
pub use user::{SavedAddress, User, UserCredentials, UserProfile};
