//! Session management.

use crate::user::User;
use crate::AuthError;
use kirana_commerce::ids::{CartId, SessionId};
use serde::{Deserialize, Serialize};

/// Random bytes per session/CSRF token, before base64 encoding.
const TOKEN_BYTES: usize = 24;

/// A storefront session, anonymous or authenticated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    /// Session ID.
    pub id: SessionId,
    /// The user (anonymous or authenticated).
    pub user: User,
    /// Cart associated with this session.
    pub cart_id: Option<CartId>,
    /// CSRF token for form protection.
    pub csrf_token: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last activity.
    pub last_active_at: i64,
    /// Unix timestamp when session expires.
    pub expires_at: i64,
}

impl AuthSession {
    /// Default session duration: 7 days.
    pub const DEFAULT_DURATION_SECS: i64 = 7 * 24 * 60 * 60;

    /// Create a new session for an anonymous user.
    pub fn anonymous() -> Self {
        let id = SessionId::new(secure_token());
        let user = User::anonymous(id.as_str());
        Self::build(id, user)
    }

    /// Create a new session for an authenticated user.
    pub fn authenticated(user: User) -> Self {
        Self::build(SessionId::new(secure_token()), user)
    }

    fn build(id: SessionId, user: User) -> Self {
        let now = current_timestamp();
        Self {
            id,
            user,
            cart_id: None,
            csrf_token: secure_token(),
            created_at: now,
            last_active_at: now,
            expires_at: now + Self::DEFAULT_DURATION_SECS,
        }
    }

    /// Create session with custom duration.
    pub fn with_duration(mut self, duration_secs: i64) -> Self {
        self.expires_at = self.created_at + duration_secs;
        self
    }

    /// Associate a cart with this session.
    pub fn with_cart(mut self, cart_id: CartId) -> Self {
        self.cart_id = Some(cart_id);
        self
    }

    /// Check if session is expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Check if session is valid (not expired).
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }

    /// Validate the session, returning error if expired.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.is_expired() {
            Err(AuthError::SessionExpired)
        } else {
            Ok(())
        }
    }

    /// Update last activity timestamp.
    pub fn touch(&mut self) {
        self.last_active_at = current_timestamp();
    }

    /// Extend session expiration.
    pub fn extend(&mut self, duration_secs: i64) {
        self.expires_at = current_timestamp() + duration_secs;
        self.touch();
    }

    /// Verify CSRF token.
    pub fn verify_csrf(&self, token: &str) -> Result<(), AuthError> {
        if self.csrf_token == token {
            Ok(())
        } else {
            Err(AuthError::CsrfMismatch)
        }
    }

    /// Regenerate CSRF token.
    pub fn regenerate_csrf(&mut self) {
        self.csrf_token = secure_token();
    }

    /// Upgrade an anonymous session after login. The cart association is
    /// kept so the guest cart follows the user.
    pub fn upgrade(&mut self, user: User) -> Result<(), AuthError> {
        if !self.user.is_anonymous() {
            return Err(AuthError::Internal(
                "Session already authenticated".to_string(),
            ));
        }
        self.user = user;
        self.regenerate_csrf();
        self.touch();
        Ok(())
    }

    /// Get time until expiration in seconds.
    pub fn time_to_expiry(&self) -> i64 {
        (self.expires_at - current_timestamp()).max(0)
    }
}

/// Generate a URL-safe random token.
fn secure_token() -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use rand::RngCore;

    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
