//! Checkout module.
//!
//! Contains the checkout state machine, shipping form validation, payment
//! methods, the gateway seam, and order records.

mod flow;
mod gateway;
mod order;
mod payment;
mod shipping;

pub use flow::{CheckoutConfig, CheckoutFlow, CheckoutStage, DEFAULT_ORDER_NUMBER_PREFIX};
pub use gateway::{
    GatewayError, GatewayPrefill, PaymentConfirmation, PaymentGateway, PaymentRequest,
};
pub use order::{generate_order_number, DeliveryWindow, Order, OrderConfirmation};
pub use payment::PaymentMethod;
pub use shipping::{is_valid_email, is_valid_phone, is_valid_pincode, ShippingForm};
