//! Checkout flow state machine.
//!
//! The flow advances Shipping -> Payment -> Review -> Placed. Each forward
//! transition is guarded (form validation, payment method parsing, payment
//! collection) and backward navigation is always allowed until the order is
//! placed. Entering review snapshots the cart lines and totals; the snapshot
//! is authoritative from then on, so later cart edits cannot change what the
//! customer confirmed.

use crate::cart::{Cart, CouponStatus, LineItem, OrderTotals, FLAT_SHIPPING_FEE_CENTS};
use crate::checkout::gateway::{
    GatewayError, GatewayPrefill, PaymentConfirmation, PaymentGateway, PaymentRequest,
};
use crate::checkout::order::{generate_order_number, Order};
use crate::checkout::payment::PaymentMethod;
use crate::checkout::shipping::ShippingForm;
use crate::error::{CommerceError, ValidationError};
use crate::ids::CartId;
use crate::money::{Currency, Money};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default order number prefix.
pub const DEFAULT_ORDER_NUMBER_PREFIX: &str = "KR-";
/// How long to wait for the payment gateway to load.
const DEFAULT_GATEWAY_LOAD_TIMEOUT_SECS: u64 = 10;
/// Default earliest delivery, in days after placement.
const DEFAULT_MIN_DELIVERY_DAYS: i64 = 5;
/// Default latest delivery, in days after placement.
const DEFAULT_MAX_DELIVERY_DAYS: i64 = 7;

/// Stages in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStage {
    /// Shipping details form.
    Shipping,
    /// Payment method selection.
    Payment,
    /// Order review before placement.
    Review,
    /// Order placed.
    Placed,
}

impl CheckoutStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStage::Shipping => "shipping",
            CheckoutStage::Payment => "payment",
            CheckoutStage::Review => "review",
            CheckoutStage::Placed => "placed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStage::Shipping => "Shipping",
            CheckoutStage::Payment => "Payment",
            CheckoutStage::Review => "Review",
            CheckoutStage::Placed => "Order Placed",
        }
    }

    /// 1-indexed position in the three-step progress indicator.
    /// The placed stage keeps the final position.
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStage::Shipping => 1,
            CheckoutStage::Payment => 2,
            CheckoutStage::Review | CheckoutStage::Placed => 3,
        }
    }
}

/// Checkout behavior knobs.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Currency orders are priced in.
    pub currency: Currency,
    /// Flat shipping fee in minor units.
    pub flat_shipping_fee_cents: i64,
    /// Prefix for generated order numbers.
    pub order_number_prefix: String,
    /// Bound on how long the payment gateway may take to load.
    pub gateway_load_timeout: Duration,
    /// Earliest delivery, in days after placement.
    pub min_delivery_days: i64,
    /// Latest delivery, in days after placement.
    pub max_delivery_days: i64,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            currency: Currency::INR,
            flat_shipping_fee_cents: FLAT_SHIPPING_FEE_CENTS,
            order_number_prefix: DEFAULT_ORDER_NUMBER_PREFIX.to_string(),
            gateway_load_timeout: Duration::from_secs(DEFAULT_GATEWAY_LOAD_TIMEOUT_SECS),
            min_delivery_days: DEFAULT_MIN_DELIVERY_DAYS,
            max_delivery_days: DEFAULT_MAX_DELIVERY_DAYS,
        }
    }
}

impl CheckoutConfig {
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_flat_shipping_fee_cents(mut self, cents: i64) -> Self {
        self.flat_shipping_fee_cents = cents;
        self
    }

    pub fn with_order_number_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.order_number_prefix = prefix.into();
        self
    }

    pub fn with_gateway_load_timeout(mut self, timeout: Duration) -> Self {
        self.gateway_load_timeout = timeout;
        self
    }

    pub fn with_delivery_window_days(mut self, min: i64, max: i64) -> Self {
        self.min_delivery_days = min;
        self.max_delivery_days = max;
        self
    }
}

/// Cart lines and totals captured when the customer enters review.
#[derive(Debug, Clone)]
struct ReviewSnapshot {
    items: Vec<LineItem>,
    totals: OrderTotals,
}

/// Checkout session state.
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    /// Cart this checkout was started from.
    pub cart_id: CartId,
    /// Coupon entry. Display only; no coupon produces a discount yet.
    pub coupon: CouponStatus,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last transition.
    pub updated_at: i64,
    config: CheckoutConfig,
    stage: CheckoutStage,
    shipping: ShippingForm,
    payment_method: PaymentMethod,
    snapshot: Option<ReviewSnapshot>,
    completed: Option<Order>,
}

impl CheckoutFlow {
    /// Start a checkout for a cart. An empty cart has nothing to check out.
    pub fn begin(cart: &Cart, config: CheckoutConfig) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        tracing::debug!(cart_id = %cart.id, lines = cart.unique_item_count(), "Checkout started");
        let now = current_timestamp();
        Ok(Self {
            cart_id: cart.id.clone(),
            coupon: CouponStatus::none(),
            created_at: now,
            updated_at: now,
            config,
            stage: CheckoutStage::Shipping,
            shipping: ShippingForm::new(),
            payment_method: PaymentMethod::default(),
            snapshot: None,
            completed: None,
        })
    }

    /// Current stage.
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Shipping details as last submitted (or edited).
    pub fn shipping(&self) -> &ShippingForm {
        &self.shipping
    }

    /// Selected payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Lines under review, once a snapshot exists.
    pub fn review_items(&self) -> Option<&[LineItem]> {
        self.snapshot.as_ref().map(|s| s.items.as_slice())
    }

    /// Totals under review, once a snapshot exists.
    pub fn review_totals(&self) -> Option<OrderTotals> {
        self.snapshot.as_ref().map(|s| s.totals)
    }

    /// The placed order, if checkout has completed.
    pub fn completed_order(&self) -> Option<&Order> {
        self.completed.as_ref()
    }

    pub fn is_placed(&self) -> bool {
        self.stage == CheckoutStage::Placed
    }

    /// Submit the shipping form.
    ///
    /// The form is stored whether or not it validates, so the customer's
    /// entries survive a failed submit. Validation stops at the first
    /// failing rule; the missing-fields rule lists every blank field.
    pub fn submit_shipping(&mut self, form: ShippingForm) -> Result<(), CommerceError> {
        if self.stage != CheckoutStage::Shipping {
            return Err(self.invalid_transition(CheckoutStage::Payment));
        }

        self.shipping = form;
        self.shipping.validate()?;
        self.stage = CheckoutStage::Payment;
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Select a payment method and move to review.
    ///
    /// Snapshots the cart lines and computes the totals; from here on the
    /// snapshot is what gets placed, regardless of later cart edits.
    pub fn submit_payment(&mut self, raw_method: &str, cart: &Cart) -> Result<(), CommerceError> {
        if self.stage != CheckoutStage::Payment {
            return Err(self.invalid_transition(CheckoutStage::Review));
        }

        let method = PaymentMethod::from_raw(raw_method)
            .ok_or_else(|| ValidationError::UnsupportedPaymentMethod(raw_method.to_string()))?;

        let shipping_fee = Money::new(self.config.flat_shipping_fee_cents, self.config.currency);
        let totals =
            OrderTotals::compute(&cart.items, self.config.currency, shipping_fee, &self.coupon)?;

        self.payment_method = method;
        self.snapshot = Some(ReviewSnapshot {
            items: cart.items.clone(),
            totals,
        });
        self.stage = CheckoutStage::Review;
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Go back one stage. Entered data is retained; no re-validation.
    pub fn back(&mut self) -> Result<CheckoutStage, CommerceError> {
        let prev = match self.stage {
            CheckoutStage::Payment => CheckoutStage::Shipping,
            CheckoutStage::Review => {
                // Leaving review invalidates the draft; a re-submit
                // re-reads the live cart.
                self.snapshot = None;
                CheckoutStage::Payment
            }
            CheckoutStage::Shipping | CheckoutStage::Placed => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: self.stage.as_str().to_string(),
                    to: "none".to_string(),
                })
            }
        };

        self.stage = prev;
        self.updated_at = current_timestamp();
        Ok(prev)
    }

    /// Place the order under review.
    ///
    /// Cash on delivery places immediately. Gateway payments load the
    /// gateway (bounded by `CheckoutConfig::gateway_load_timeout`), then
    /// open it for the snapshot total; any gateway failure leaves the flow
    /// at review with the snapshot intact so the customer can retry.
    pub async fn place_order(
        &mut self,
        gateway: &dyn PaymentGateway,
    ) -> Result<&Order, CommerceError> {
        if self.stage != CheckoutStage::Review {
            return Err(self.invalid_transition(CheckoutStage::Placed));
        }
        let snapshot = match self.snapshot.take() {
            Some(snapshot) => snapshot,
            None => return Err(self.invalid_transition(CheckoutStage::Placed)),
        };

        let payment_reference = match self.payment_method {
            PaymentMethod::CashOnDelivery => None,
            PaymentMethod::Gateway => {
                match self.collect_gateway_payment(&snapshot, gateway).await {
                    Ok(confirmation) => Some(confirmation.payment_reference),
                    Err(e) => {
                        tracing::warn!(error = %e, "Payment gateway failure, staying on review");
                        self.snapshot = Some(snapshot);
                        return Err(CommerceError::Gateway(e));
                    }
                }
            }
        };

        let order = Order::place(
            generate_order_number(&self.config.order_number_prefix),
            snapshot.items,
            self.shipping.clone(),
            self.payment_method,
            payment_reference,
            snapshot.totals,
            self.config.min_delivery_days,
            self.config.max_delivery_days,
        );
        tracing::info!(
            order_number = %order.order_number,
            method = self.payment_method.as_str(),
            total_cents = order.totals.total.amount_cents,
            "Order placed"
        );

        self.stage = CheckoutStage::Placed;
        self.updated_at = current_timestamp();
        Ok(&*self.completed.insert(order))
    }

    /// Load the gateway within the configured bound, then collect payment
    /// for the snapshot total.
    async fn collect_gateway_payment(
        &self,
        snapshot: &ReviewSnapshot,
        gateway: &dyn PaymentGateway,
    ) -> Result<PaymentConfirmation, GatewayError> {
        match tokio::time::timeout(self.config.gateway_load_timeout, gateway.load()).await {
            Ok(result) => result?,
            Err(_) => return Err(GatewayError::LoadTimeout),
        }

        let request = PaymentRequest {
            amount_minor_units: snapshot.totals.total.minor_units(),
            currency_code: snapshot.totals.total.currency.code().to_string(),
            order_reference: format!("order_{}", Utc::now().timestamp_millis()),
            prefill: GatewayPrefill {
                name: self.shipping.full_name.clone(),
                email: self.shipping.email.clone(),
                contact: self.shipping.phone.clone(),
            },
            note: self.shipping.one_line(),
        };
        gateway.open(request).await
    }

    fn invalid_transition(&self, to: CheckoutStage) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.stage.as_str().to_string(),
            to: to.as_str().to_string(),
        }
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
