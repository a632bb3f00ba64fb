//! Payment method selection.

use serde::{Deserialize, Serialize};

/// How the order will be paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Pay in cash when the order arrives.
    #[default]
    CashOnDelivery,
    /// Pay now through the hosted payment gateway.
    Gateway,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cod",
            PaymentMethod::Gateway => "gateway",
        }
    }

    /// Human-readable name for summaries and confirmations.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::Gateway => "Pay Online",
        }
    }

    /// Parse the raw selector value from the payment form.
    ///
    /// Accepts the supported methods only; anything else ("bitcoin",
    /// "wallet", ...) yields None and the payment stage rejects it.
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "cod" => Some(PaymentMethod::CashOnDelivery),
            "razorpay" | "gateway" => Some(PaymentMethod::Gateway),
            _ => None,
        }
    }

    /// Whether payment is collected before the order is placed.
    pub fn is_prepaid(&self) -> bool {
        matches!(self, PaymentMethod::Gateway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_supported() {
        assert_eq!(
            PaymentMethod::from_raw("cod"),
            Some(PaymentMethod::CashOnDelivery)
        );
        assert_eq!(
            PaymentMethod::from_raw("razorpay"),
            Some(PaymentMethod::Gateway)
        );
        assert_eq!(
            PaymentMethod::from_raw(" COD "),
            Some(PaymentMethod::CashOnDelivery)
        );
    }

    #[test]
    fn test_from_raw_unsupported() {
        assert_eq!(PaymentMethod::from_raw("bitcoin"), None);
        assert_eq!(PaymentMethod::from_raw("wallet"), None);
        assert_eq!(PaymentMethod::from_raw(""), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            PaymentMethod::CashOnDelivery.display_name(),
            "Cash on Delivery"
        );
        assert_eq!(PaymentMethod::Gateway.display_name(), "Pay Online");
    }
}
