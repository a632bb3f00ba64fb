//! Shopping cart module.
//!
//! Contains the cart, its line items, and order total calculations.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CouponStatus, OrderTotals, FLAT_SHIPPING_FEE_CENTS};
