//! Order records and the confirmation view.

use crate::cart::{LineItem, OrderTotals};
use crate::checkout::payment::PaymentMethod;
use crate::checkout::shipping::ShippingForm;
use crate::ids::OrderId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Characters order number suffixes are drawn from.
const ORDER_NUMBER_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Length of the random order number suffix.
const ORDER_NUMBER_SUFFIX_LEN: usize = 8;

/// Generate an order number: fixed prefix plus 8 random chars from A-Z0-9.
pub fn generate_order_number(prefix: &str) -> String {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    let suffix: String = (0..ORDER_NUMBER_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..ORDER_NUMBER_CHARSET.len());
            ORDER_NUMBER_CHARSET[idx] as char
        })
        .collect();
    format!("{}{}", prefix, suffix)
}

/// Estimated delivery window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryWindow {
    /// Earliest expected delivery.
    pub earliest: DateTime<Utc>,
    /// Latest expected delivery.
    pub latest: DateTime<Utc>,
}

impl DeliveryWindow {
    /// Window of `min_days..=max_days` after the order time.
    pub fn from_order_time(created_at: DateTime<Utc>, min_days: i64, max_days: i64) -> Self {
        Self {
            earliest: created_at + Duration::days(min_days),
            latest: created_at + Duration::days(max_days),
        }
    }

    /// Display form, e.g. "5 January - 7 January 2026".
    pub fn display(&self) -> String {
        format!(
            "{} - {}",
            self.earliest.format("%-d %B"),
            self.latest.format("%-d %B %Y")
        )
    }
}

/// A placed order.
///
/// Orders are immutable snapshots: the items, shipping details, and totals
/// are captured at placement and later cart edits never touch them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Internal identifier.
    pub id: OrderId,
    /// Human-facing order number (prefix + random suffix).
    pub order_number: String,
    /// Snapshot of the purchased lines.
    pub items: Vec<LineItem>,
    /// Shipping details as validated at checkout.
    pub shipping: ShippingForm,
    /// How the order is paid.
    pub payment_method: PaymentMethod,
    /// Gateway transaction reference (gateway payments only).
    pub payment_reference: Option<String>,
    /// Totals breakdown collected from the review snapshot.
    pub totals: OrderTotals,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// Estimated delivery window.
    pub delivery_window: DeliveryWindow,
}

impl Order {
    /// Assemble an order at placement time.
    #[allow(clippy::too_many_arguments)]
    pub fn place(
        order_number: String,
        items: Vec<LineItem>,
        shipping: ShippingForm,
        payment_method: PaymentMethod,
        payment_reference: Option<String>,
        totals: OrderTotals,
        min_delivery_days: i64,
        max_delivery_days: i64,
    ) -> Self {
        let created_at = Utc::now();
        Self {
            id: OrderId::generate(),
            order_number,
            items,
            shipping,
            payment_method,
            payment_reference,
            totals,
            created_at,
            delivery_window: DeliveryWindow::from_order_time(
                created_at,
                min_delivery_days,
                max_delivery_days,
            ),
        }
    }

    /// Total item count across the snapshot.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Confirmation screen data.
///
/// Only constructible from a placed order; a caller that reaches the
/// confirmation without one has nothing to render and falls back to the
/// storefront root.
#[derive(Debug, Clone)]
pub struct OrderConfirmation {
    order: Order,
}

impl OrderConfirmation {
    pub fn from_order(order: Order) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn order_number(&self) -> &str {
        &self.order.order_number
    }

    /// "Paid" for gateway payments, "Pay on delivery" for COD.
    pub fn payment_status(&self) -> &'static str {
        if self.order.payment_method.is_prepaid() {
            "Paid"
        } else {
            "Pay on delivery"
        }
    }

    /// "Cash on Delivery" or "Paid online".
    pub fn payment_label(&self) -> &'static str {
        match self.order.payment_method {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::Gateway => "Paid online",
        }
    }

    /// E.g. "Estimated delivery: 5 January - 7 January 2026".
    pub fn delivery_summary(&self) -> String {
        format!("Estimated delivery: {}", self.order.delivery_window.display())
    }
}
