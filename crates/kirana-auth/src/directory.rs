//! In-memory account directory.
//!
//! Holds credentials and profiles keyed by normalized email. Login failures
//! are counted per account and repeated failures lock the account for a
//! cooling-off period.

use crate::password::PasswordHasher;
use crate::session::AuthSession;
use crate::user::{SavedAddress, UserCredentials, UserProfile};
use crate::AuthError;
use kirana_commerce::ids::{AddressId, UserId};
use std::collections::HashMap;

/// Failed logins allowed before lockout.
pub const MAX_FAILED_ATTEMPTS: i32 = 5;
/// How long a locked account stays locked: 15 minutes.
pub const LOCKOUT_DURATION_SECS: i64 = 15 * 60;

/// In-memory account store.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    hasher: PasswordHasher,
    accounts: HashMap<String, Account>,
}

#[derive(Debug)]
struct Account {
    credentials: UserCredentials,
    profile: UserProfile,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account and return an authenticated session.
    ///
    /// All fields are required; emails are unique case-insensitively and
    /// passwords must pass the strength rules.
    pub fn signup(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        if [name, phone, email, password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AuthError::MissingFields);
        }

        let key = normalize_email(email);
        if self.accounts.contains_key(&key) {
            return Err(AuthError::UserAlreadyExists(key));
        }
        PasswordHasher::validate_password(password)?;

        let user_id = UserId::generate();
        let password_hash = self.hasher.hash(password)?;
        let profile = UserProfile::new(user_id.clone(), name.trim(), &key, phone.trim());
        let session = AuthSession::authenticated(profile.to_user());

        self.accounts.insert(
            key,
            Account {
                credentials: UserCredentials::new(user_id.clone(), &profile.email, password_hash),
                profile,
            },
        );
        tracing::info!(user_id = %user_id, "Account created");
        Ok(session)
    }

    /// Verify credentials and return an authenticated session.
    ///
    /// Failures are counted; after `MAX_FAILED_ATTEMPTS` the account locks
    /// for `LOCKOUT_DURATION_SECS`. A locked account rejects even the
    /// correct password until the lock expires.
    pub fn login(&mut self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let key = normalize_email(email);
        let account = match self.accounts.get_mut(&key) {
            Some(account) => account,
            None => {
                tracing::warn!("Login attempt for unknown account");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if account.credentials.is_locked() {
            tracing::warn!(user_id = %account.credentials.user_id, "Login attempt on locked account");
            return Err(AuthError::AccountLocked);
        }

        if !self
            .hasher
            .verify(password, &account.credentials.password_hash)
        {
            account
                .credentials
                .record_failed_attempt(MAX_FAILED_ATTEMPTS, LOCKOUT_DURATION_SECS);
            tracing::warn!(
                user_id = %account.credentials.user_id,
                attempts = account.credentials.failed_attempts,
                "Failed login attempt"
            );
            return Err(AuthError::InvalidCredentials);
        }

        account.credentials.reset_failed_attempts();
        tracing::info!(user_id = %account.credentials.user_id, "Login succeeded");
        Ok(AuthSession::authenticated(account.profile.to_user()))
    }

    /// Save an address to a user's book (the checkout save-to-profile hook).
    pub fn save_address(
        &mut self,
        email: &str,
        address: SavedAddress,
    ) -> Result<AddressId, AuthError> {
        let key = normalize_email(email);
        let account = self
            .accounts
            .get_mut(&key)
            .ok_or(AuthError::UserNotFound(key))?;
        Ok(account.profile.add_address(address))
    }

    /// Look up a profile by email.
    pub fn profile(&self, email: &str) -> Option<&UserProfile> {
        self.accounts
            .get(&normalize_email(email))
            .map(|account| &account.profile)
    }

    /// Mutable profile access, for address book edits.
    pub fn profile_mut(&mut self, email: &str) -> Option<&mut UserProfile> {
        self.accounts
            .get_mut(&normalize_email(email))
            .map(|account| &mut account.profile)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(directory: &mut AccountDirectory) -> AuthSession {
        directory
            .signup("Asha Varma", "9876543210", "asha@example.com", "Secret123")
            .unwrap()
    }

    #[test]
    fn test_signup_and_login() {
        let mut directory = AccountDirectory::new();
        let session = signup(&mut directory);
        assert!(session.user.is_authenticated());
        assert_eq!(session.user.email(), Some("asha@example.com"));

        let session = directory.login("asha@example.com", "Secret123").unwrap();
        assert_eq!(session.user.display_name(), "Asha Varma");
    }

    #[test]
    fn test_signup_requires_all_fields() {
        let mut directory = AccountDirectory::new();
        let result = directory.signup("", "9876543210", "asha@example.com", "Secret123");
        assert!(matches!(result, Err(AuthError::MissingFields)));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_signup_rejects_duplicate_email() {
        let mut directory = AccountDirectory::new();
        signup(&mut directory);

        // Same address, different case.
        let result = directory.signup("Other", "9123456780", "Asha@Example.com", "Secret456");
        assert!(matches!(result, Err(AuthError::UserAlreadyExists(_))));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_signup_rejects_weak_password() {
        let mut directory = AccountDirectory::new();
        let result = directory.signup("Asha Varma", "9876543210", "asha@example.com", "weak");
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
    }

    #[test]
    fn test_login_unknown_email() {
        let mut directory = AccountDirectory::new();
        let result = directory.login("nobody@example.com", "Secret123");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_lockout_after_five_failures() {
        let mut directory = AccountDirectory::new();
        signup(&mut directory);

        for _ in 0..MAX_FAILED_ATTEMPTS {
            let result = directory.login("asha@example.com", "WrongPass1");
            assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        }

        // Locked now, even for the correct password.
        let result = directory.login("asha@example.com", "Secret123");
        assert!(matches!(result, Err(AuthError::AccountLocked)));
    }

    #[test]
    fn test_successful_login_resets_failure_count() {
        let mut directory = AccountDirectory::new();
        signup(&mut directory);

        for _ in 0..MAX_FAILED_ATTEMPTS - 1 {
            let _ = directory.login("asha@example.com", "WrongPass1");
        }
        directory.login("asha@example.com", "Secret123").unwrap();

        // The counter restarted, so one more bad attempt does not lock.
        let result = directory.login("asha@example.com", "WrongPass1");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        directory.login("asha@example.com", "Secret123").unwrap();
    }

    #[test]
    fn test_save_address_prefills_checkout() {
        use kirana_commerce::cart::Cart;
        use kirana_commerce::catalog::Product;
        use kirana_commerce::checkout::{CheckoutConfig, CheckoutFlow, CheckoutStage};
        use kirana_commerce::money::{Currency, Money};

        let mut directory = AccountDirectory::new();
        signup(&mut directory);

        let address = SavedAddress::new(
            "Asha Varma",
            "9876543210",
            "14 MG Road",
            "Bengaluru",
            "Karnataka",
            "560001",
        );
        directory.save_address("asha@example.com", address).unwrap();

        // The saved default address prefills a form the checkout accepts.
        let profile = directory.profile("asha@example.com").unwrap();
        let form = profile
            .default_address()
            .unwrap()
            .to_shipping_form(&profile.email);

        let mut cart = Cart::new();
        cart.add_item(
            &Product::new("p-tea", "Assam Tea 250g", Money::new(15000, Currency::INR)),
            1,
        );
        let mut flow = CheckoutFlow::begin(&cart, CheckoutConfig::default()).unwrap();
        flow.submit_shipping(form).unwrap();
        assert_eq!(flow.stage(), CheckoutStage::Payment);

        let missing = directory.save_address(
            "nobody@example.com",
            SavedAddress::new("X", "9", "a", "b", "c", "1"),
        );
        assert!(matches!(missing, Err(AuthError::UserNotFound(_))));
    }
}
