//! Shipping details form and its validation rules.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Shipping details as entered by the customer.
///
/// All fields are free text until `validate` runs; the checkout flow keeps
/// the form verbatim across backward navigation so nothing re-types.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingForm {
    /// Recipient full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone (free-form; digits are extracted for validation).
    pub phone: String,
    /// Street address.
    pub address: String,
    /// City, dependent on the selected state.
    pub city: String,
    /// State or union territory.
    pub state: String,
    /// 6-digit PIN code.
    pub pincode: String,
    /// Whether to save this address to the customer profile.
    pub save_to_profile: bool,
}

impl ShippingForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a state. Changing state clears the dependent city selection.
    pub fn set_state(&mut self, state: impl Into<String>) {
        let state = state.into();
        if state != self.state {
            self.city.clear();
        }
        self.state = state;
    }

    /// Single-line address for gateway notes and order summaries.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.address, self.city, self.state, self.pincode
        )
    }

    /// Run the stage guard rules, in order. The first failing rule wins.
    ///
    /// 1. every required field non-blank,
    /// 2. email shaped like an address,
    /// 3. phone a 10-digit Indian mobile number after stripping,
    /// 4. PIN code 6 digits not starting with zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("full name", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("PIN code", &self.pincode),
        ];
        let missing: Vec<String> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| label.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_phone(&self.phone) {
            return Err(ValidationError::InvalidPhone);
        }
        if !is_valid_pincode(&self.pincode) {
            return Err(ValidationError::InvalidPincode);
        }
        Ok(())
    }
}

/// Check email shape: `local@domain.tld`, no whitespace, one `@`, and an
/// interior dot in the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Check for a valid 10-digit Indian mobile number.
///
/// Non-digit characters (spaces, dashes) are stripped first; the result
/// must be exactly 10 digits starting with 6-9.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.len() == 10 && matches!(digits.bytes().next(), Some(b'6'..=b'9'))
}

/// Check for a valid 6-digit Indian PIN code (no stripping; the raw value
/// must be digits with a non-zero first digit).
pub fn is_valid_pincode(pincode: &str) -> bool {
    pincode.len() == 6
        && pincode.bytes().all(|b| b.is_ascii_digit())
        && !pincode.starts_with('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ShippingForm {
        ShippingForm {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 MG Road".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            save_to_profile: false,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_listed() {
        let mut form = filled_form();
        form.phone.clear();
        form.city = "   ".to_string();

        match form.validate() {
            Err(ValidationError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["phone".to_string(), "city".to_string()]);
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_checked_before_email() {
        // A blank phone blocks before the bad email is even looked at.
        let mut form = filled_form();
        form.email = "not-an-email".to_string();
        form.phone.clear();

        assert!(matches!(
            form.validate(),
            Err(ValidationError::MissingFields(_))
        ));
    }

    #[test]
    fn test_email_rule() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("user+tag@shop.example.in"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@@shop.in"));
        assert!(!is_valid_email("us er@shop.in"));
        assert!(!is_valid_email("@shop.in"));

        let mut form = filled_form();
        form.email = "user@domain".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_phone_rule() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("98765-43210"));
        assert!(!is_valid_phone("+91 98765 43210")); // 12 digits after strip
        assert!(!is_valid_phone("98765432")); // too short
        assert!(!is_valid_phone("5876543210")); // bad leading digit
        assert!(!is_valid_phone(""));

        let mut form = filled_form();
        form.phone = "98765432".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn test_pincode_rule() {
        assert!(is_valid_pincode("123456"));
        assert!(!is_valid_pincode("12345"));
        assert!(!is_valid_pincode("023456"));
        assert!(!is_valid_pincode("12 456"));
        assert!(!is_valid_pincode("1234567"));

        let mut form = filled_form();
        form.pincode = "12345".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidPincode));

        form.pincode = "023456".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidPincode));
    }

    #[test]
    fn test_set_state_resets_city() {
        let mut form = filled_form();
        form.set_state("Kerala");
        assert_eq!(form.state, "Kerala");
        assert!(form.city.is_empty());

        form.city = "Kochi".to_string();
        form.set_state("Kerala"); // same state keeps the city
        assert_eq!(form.city, "Kochi");
    }

    #[test]
    fn test_one_line() {
        assert_eq!(
            filled_form().one_line(),
            "12 MG Road, Bangalore, Karnataka - 560001"
        );
    }
}
