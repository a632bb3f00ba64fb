//! Commerce error types.

use thiserror::Error;

/// Field-level validation failures for checkout input.
///
/// Each variant carries a distinct user-facing message; the checkout flow
/// surfaces the first failing rule and leaves the stage unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are blank.
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Email does not look like an address.
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Phone is not a 10-digit Indian mobile number.
    #[error("Please enter a valid 10-digit Indian mobile number")]
    InvalidPhone,

    /// PIN code is not a 6-digit Indian postal code.
    #[error("Please enter a valid 6-digit Indian PIN code")]
    InvalidPincode,

    /// Payment method string not recognized.
    #[error("Please select a valid payment method: {0:?} is not supported")]
    UnsupportedPaymentMethod(String),
}

/// Errors that can occur in cart and checkout operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout started with no items.
    #[error("Cart is empty")]
    EmptyCart,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// A stage guard rejected the submitted input.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The payment gateway could not collect payment.
    #[error("Payment gateway error: {0}")]
    Gateway(#[from] crate::checkout::GatewayError),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
