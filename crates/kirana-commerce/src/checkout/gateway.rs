//! Hosted payment gateway seam.
//!
//! The checkout flow talks to the gateway through this trait: `load`
//! fetches the gateway client (the script tag in a browser storefront),
//! `open` presents its checkout and resolves once the customer pays or
//! abandons. Implementations live with the embedding application; tests
//! use in-process stubs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the hosted payment gateway.
///
/// All of these leave the checkout on the review stage; the customer
/// retries by placing the order again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The gateway client could not be fetched.
    #[error("Could not load payment gateway. Please try again later")]
    LoadFailed,

    /// The gateway client did not load within the configured bound.
    #[error("Payment gateway took too long to load. Please try again later")]
    LoadTimeout,

    /// The gateway reported a failed or abandoned payment.
    #[error("Payment was not completed: {0}")]
    Declined(String),
}

/// Customer details prefilled into the gateway's checkout form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayPrefill {
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Customer phone.
    pub contact: String,
}

/// A payment collection request handed to the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRequest {
    /// Amount in minor units (paise for INR).
    pub amount_minor_units: i64,
    /// ISO currency code (e.g., "INR").
    pub currency_code: String,
    /// Merchant-side reference for reconciliation.
    pub order_reference: String,
    /// Prefill for the gateway's form.
    pub prefill: GatewayPrefill,
    /// One-line shipping address note.
    pub note: String,
}

/// Successful payment confirmation from the gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentConfirmation {
    /// The gateway's transaction reference.
    pub payment_reference: String,
}

/// A hosted payment gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Fetch the gateway client. Called once per place-order attempt.
    async fn load(&self) -> Result<(), GatewayError>;

    /// Present the gateway checkout and collect payment.
    async fn open(&self, request: PaymentRequest) -> Result<PaymentConfirmation, GatewayError>;
}
