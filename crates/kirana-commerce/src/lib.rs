//! Storefront domain types and checkout logic for Kirana.
//!
//! This crate provides the core of a small-grocer storefront:
//!
//! - **Catalog**: Products, categories, typed merchandising tags
//! - **Cart**: Shopping cart with forgiving line-item semantics
//! - **Checkout**: Guarded multi-stage checkout flow, orders
//! - **Region**: Indian state and city data for the shipping form
//!
//! # Example
//!
//! ```rust,ignore
//! use kirana_commerce::prelude::*;
//!
//! // Build a cart
//! let mut cart = Cart::new();
//! cart.add_item(&product, 2);
//!
//! // Walk the checkout
//! let mut flow = CheckoutFlow::begin(&cart, CheckoutConfig::default())?;
//! flow.submit_shipping(form)?;
//! flow.submit_payment("cod", &cart)?;
//! let order = flow.place_order(&gateway).await?;
//! println!("Placed {}", order.order_number);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod region;

pub use error::{CommerceError, ValidationError};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, ValidationError};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, ProductCategory, ProductTag};

    // Cart
    pub use crate::cart::{
        Cart, CouponStatus, LineItem, OrderTotals, FLAT_SHIPPING_FEE_CENTS,
        MAX_QUANTITY_PER_ITEM,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutConfig, CheckoutFlow, CheckoutStage, DeliveryWindow, Order, OrderConfirmation,
        PaymentConfirmation, PaymentGateway, PaymentMethod, PaymentRequest, ShippingForm,
    };

    // Region
    pub use crate::region::{cities_of, is_known_state, states};
}
