//! User types and the saved address book.

use kirana_commerce::checkout::ShippingForm;
use kirana_commerce::ids::{AddressId, UserId};
use serde::{Deserialize, Serialize};

/// A user in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum User {
    /// Anonymous/guest user with session tracking.
    Anonymous {
        /// Session identifier.
        session_id: String,
    },
    /// Authenticated user.
    Authenticated {
        /// User ID.
        id: UserId,
        /// Email address.
        email: String,
        /// Display name.
        name: String,
        /// Mobile number.
        phone: String,
    },
}

impl User {
    /// Create a new anonymous user.
    pub fn anonymous(session_id: impl Into<String>) -> Self {
        User::Anonymous {
            session_id: session_id.into(),
        }
    }

    /// Create a new authenticated user.
    pub fn authenticated(
        id: UserId,
        email: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        User::Authenticated {
            id,
            email: email.into(),
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Check if user is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, User::Authenticated { .. })
    }

    /// Check if user is anonymous.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, User::Anonymous { .. })
    }

    /// Get user ID if authenticated.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            User::Authenticated { id, .. } => Some(id),
            User::Anonymous { .. } => None,
        }
    }

    /// Get email if authenticated.
    pub fn email(&self) -> Option<&str> {
        match self {
            User::Authenticated { email, .. } => Some(email),
            User::Anonymous { .. } => None,
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &str {
        match self {
            User::Authenticated { name, .. } => name,
            User::Anonymous { session_id } => session_id,
        }
    }
}

/// Stored user credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCredentials {
    /// User ID.
    pub user_id: UserId,
    /// Email address.
    pub email: String,
    /// Hashed password (PHC string).
    pub password_hash: String,
    /// Number of failed login attempts since the last success.
    pub failed_attempts: i32,
    /// Timestamp when account was locked (if applicable).
    pub locked_until: Option<i64>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl UserCredentials {
    /// Create new credentials.
    pub fn new(
        user_id: UserId,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = current_timestamp();
        Self {
            user_id,
            email: email.into(),
            password_hash: password_hash.into(),
            failed_attempts: 0,
            locked_until: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if account is locked.
    pub fn is_locked(&self) -> bool {
        if let Some(locked_until) = self.locked_until {
            current_timestamp() < locked_until
        } else {
            false
        }
    }

    /// Record a failed login attempt, locking the account once the limit
    /// is reached.
    pub fn record_failed_attempt(&mut self, max_attempts: i32, lock_duration_secs: i64) {
        self.failed_attempts += 1;
        self.updated_at = current_timestamp();

        if self.failed_attempts >= max_attempts {
            self.locked_until = Some(current_timestamp() + lock_duration_secs);
        }
    }

    /// Reset failed attempts (on successful login).
    pub fn reset_failed_attempts(&mut self) {
        self.failed_attempts = 0;
        self.locked_until = None;
        self.updated_at = current_timestamp();
    }

    /// Update password hash.
    pub fn set_password_hash(&mut self, hash: impl Into<String>) {
        self.password_hash = hash.into();
        self.updated_at = current_timestamp();
    }
}

/// A saved delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedAddress {
    /// Address ID.
    pub id: AddressId,
    /// Recipient full name.
    pub full_name: String,
    /// Contact phone.
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or union territory.
    pub state: String,
    /// PIN code.
    pub pincode: String,
    /// Whether this is the default delivery address.
    pub is_default: bool,
}

impl SavedAddress {
    pub fn new(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        pincode: impl Into<String>,
    ) -> Self {
        Self {
            id: AddressId::generate(),
            full_name: full_name.into(),
            phone: phone.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            pincode: pincode.into(),
            is_default: false,
        }
    }

    /// Prefill a checkout shipping form from this address.
    ///
    /// Email lives on the profile, not the address, so it is passed in.
    pub fn to_shipping_form(&self, email: &str) -> ShippingForm {
        let mut form = ShippingForm::new();
        form.full_name = self.full_name.clone();
        form.email = email.to_string();
        form.phone = self.phone.clone();
        form.address = self.address.clone();
        form.city = self.city.clone();
        form.state = self.state.clone();
        form.pincode = self.pincode.clone();
        form
    }
}

/// User profile with the saved address book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// User ID.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Mobile number.
    pub phone: String,
    /// Saved delivery addresses.
    pub addresses: Vec<SavedAddress>,
}

impl UserProfile {
    /// Create a new profile with an empty address book.
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            addresses: Vec::new(),
        }
    }

    /// Add an address and return its ID. The first address saved becomes
    /// the default; an address flagged default displaces the previous
    /// default.
    pub fn add_address(&mut self, mut address: SavedAddress) -> AddressId {
        if self.addresses.is_empty() {
            address.is_default = true;
        } else if address.is_default {
            for existing in &mut self.addresses {
                existing.is_default = false;
            }
        }
        let id = address.id.clone();
        self.addresses.push(address);
        id
    }

    /// Mark an address as the default, clearing the flag on the others.
    /// Returns false if the address is not in the book.
    pub fn set_default_address(&mut self, id: &AddressId) -> bool {
        if !self.addresses.iter().any(|a| &a.id == id) {
            return false;
        }
        for address in &mut self.addresses {
            address.is_default = &address.id == id;
        }
        true
    }

    /// Remove an address. Remaining addresses are left untouched.
    pub fn remove_address(&mut self, id: &AddressId) -> bool {
        let before = self.addresses.len();
        self.addresses.retain(|a| &a.id != id);
        self.addresses.len() < before
    }

    /// The default delivery address, if one exists.
    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.addresses.iter().find(|a| a.is_default)
    }

    /// The authenticated user this profile belongs to.
    pub fn to_user(&self) -> User {
        User::authenticated(
            self.user_id.clone(),
            self.email.clone(),
            self.name.clone(),
            self.phone.clone(),
        )
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(name: &str) -> SavedAddress {
        SavedAddress::new(
            name,
            "9876543210",
            "14 MG Road",
            "Bengaluru",
            "Karnataka",
            "560001",
        )
    }

    fn profile() -> UserProfile {
        UserProfile::new(
            UserId::generate(),
            "Asha Varma",
            "asha@example.com",
            "9876543210",
        )
    }

    #[test]
    fn test_anonymous_user() {
        let user = User::anonymous("sess-abc");
        assert!(user.is_anonymous());
        assert!(!user.is_authenticated());
        assert!(user.user_id().is_none());
        assert_eq!(user.display_name(), "sess-abc");
    }

    #[test]
    fn test_authenticated_user() {
        let user = User::authenticated(
            UserId::new("user-1"),
            "asha@example.com",
            "Asha Varma",
            "9876543210",
        );
        assert!(user.is_authenticated());
        assert_eq!(user.email(), Some("asha@example.com"));
        assert_eq!(user.display_name(), "Asha Varma");
    }

    #[test]
    fn test_first_address_becomes_default() {
        let mut profile = profile();
        profile.add_address(address("Asha Varma"));
        assert!(profile.addresses[0].is_default);
        assert_eq!(
            profile.default_address().map(|a| a.full_name.as_str()),
            Some("Asha Varma")
        );
    }

    #[test]
    fn test_single_default_invariant() {
        let mut profile = profile();
        profile.add_address(address("Home"));
        let mut office = address("Office");
        office.is_default = true;
        profile.add_address(office);

        let defaults: Vec<&str> = profile
            .addresses
            .iter()
            .filter(|a| a.is_default)
            .map(|a| a.full_name.as_str())
            .collect();
        assert_eq!(defaults, vec!["Office"]);
    }

    #[test]
    fn test_set_default_address() {
        let mut profile = profile();
        profile.add_address(address("Home"));
        profile.add_address(address("Office"));
        let office_id = profile.addresses[1].id.clone();

        assert!(profile.set_default_address(&office_id));
        assert_eq!(
            profile.default_address().map(|a| a.id.clone()),
            Some(office_id)
        );
        assert!(!profile.addresses[0].is_default);

        assert!(!profile.set_default_address(&AddressId::new("missing")));
    }

    #[test]
    fn test_remove_address_keeps_others_intact() {
        let mut profile = profile();
        profile.add_address(address("Home"));
        profile.add_address(address("Office"));
        let home_id = profile.addresses[0].id.clone();

        assert!(profile.remove_address(&home_id));
        assert_eq!(profile.addresses.len(), 1);
        assert_eq!(profile.addresses[0].full_name, "Office");
        // The removed address was the default; nothing is promoted.
        assert!(profile.default_address().is_none());

        assert!(!profile.remove_address(&home_id));
    }

    #[test]
    fn test_address_prefills_shipping_form() {
        let mut saved = address("Asha Varma");
        saved.is_default = true;
        let form = saved.to_shipping_form("asha@example.com");
        assert_eq!(form.full_name, "Asha Varma");
        assert_eq!(form.email, "asha@example.com");
        assert_eq!(form.city, "Bengaluru");
        assert_eq!(form.state, "Karnataka");
        assert!(!form.save_to_profile);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_lockout_after_repeated_failures() {
        let mut creds = UserCredentials::new(UserId::generate(), "a@b.com", "$argon2$fake");
        for _ in 0..4 {
            creds.record_failed_attempt(5, 900);
            assert!(!creds.is_locked());
        }
        creds.record_failed_attempt(5, 900);
        assert!(creds.is_locked());

        creds.reset_failed_attempts();
        assert!(!creds.is_locked());
        assert_eq!(creds.failed_attempts, 0);
    }
}
