//! Order total calculations.

use crate::cart::LineItem;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Default flat shipping fee in paise (₹50).
pub const FLAT_SHIPPING_FEE_CENTS: i64 = 5000;

/// Sum of line totals with per-line currency checking.
pub(crate) fn subtotal_of(items: &[LineItem], currency: Currency) -> Result<Money, CommerceError> {
    let mut total = Money::zero(currency);
    for item in items {
        if item.unit_price.currency != currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: item.unit_price.currency.code().to_string(),
            });
        }
        let line_total = item.line_total().ok_or(CommerceError::Overflow)?;
        total = total.try_add(&line_total).ok_or(CommerceError::Overflow)?;
    }
    Ok(total)
}

/// Complete totals breakdown for an order.
///
/// `total = subtotal + shipping - discount`. Every amount is exact in minor
/// units; display rounding happens only when formatting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Flat shipping fee.
    pub shipping: Money,
    /// Discount amount (zero until coupons exist).
    pub discount: Money,
    /// Amount to collect.
    pub total: Money,
}

impl OrderTotals {
    /// Compute totals for a set of lines.
    pub fn compute(
        items: &[LineItem],
        currency: Currency,
        shipping: Money,
        coupon: &CouponStatus,
    ) -> Result<Self, CommerceError> {
        let subtotal = subtotal_of(items, currency)?;
        let discount = coupon.discount(currency);
        let total = subtotal
            .try_add(&shipping)
            .and_then(|t| t.try_subtract(&discount))
            .ok_or(CommerceError::Overflow)?;
        Ok(Self {
            subtotal,
            shipping,
            discount,
            total,
        })
    }

    /// Check if any discount is applied.
    pub fn has_discount(&self) -> bool {
        self.discount.amount_cents > 0
    }
}

/// Coupon entry hook.
///
/// Carries whatever code the customer typed but never produces a discount;
/// the totals line exists so the breakdown shape is stable when coupons
/// arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponStatus {
    /// Code as entered, kept for display only.
    pub code: Option<String>,
}

impl CouponStatus {
    /// No coupon entered.
    pub fn none() -> Self {
        Self::default()
    }

    /// Record an entered code without applying it.
    pub fn entered(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }

    /// The discount this coupon yields. Always zero.
    pub fn discount(&self, currency: Currency) -> Money {
        Money::zero(currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Product;

    fn product(id: &str, price_cents: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            Money::new(price_cents, Currency::INR),
        )
    }

    #[test]
    fn test_totals_with_flat_shipping() {
        // ₹100 x 2 + ₹50 x 1 with ₹50 shipping -> subtotal ₹250, total ₹300.
        let mut cart = Cart::new();
        cart.add_item(&product("a", 10000), 2);
        cart.add_item(&product("b", 5000), 1);

        let totals = OrderTotals::compute(
            &cart.items,
            cart.currency,
            Money::new(FLAT_SHIPPING_FEE_CENTS, Currency::INR),
            &CouponStatus::none(),
        )
        .unwrap();

        assert_eq!(totals.subtotal.amount_cents, 25000);
        assert_eq!(totals.shipping.amount_cents, 5000);
        assert_eq!(totals.discount.amount_cents, 0);
        assert_eq!(totals.total.amount_cents, 30000);
    }

    #[test]
    fn test_coupon_is_inert() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", 10000), 1);

        let with_code = OrderTotals::compute(
            &cart.items,
            cart.currency,
            Money::new(FLAT_SHIPPING_FEE_CENTS, Currency::INR),
            &CouponStatus::entered("WELCOME10"),
        )
        .unwrap();
        let without = OrderTotals::compute(
            &cart.items,
            cart.currency,
            Money::new(FLAT_SHIPPING_FEE_CENTS, Currency::INR),
            &CouponStatus::none(),
        )
        .unwrap();

        assert_eq!(with_code.total, without.total);
        assert!(!with_code.has_discount());
    }

    #[test]
    fn test_totals_overflow() {
        let mut cart = Cart::new();
        cart.add_item(&product("a", i64::MAX - 1), 1);
        let result = OrderTotals::compute(
            &cart.items,
            cart.currency,
            Money::new(FLAT_SHIPPING_FEE_CENTS, Currency::INR),
            &CouponStatus::none(),
        );
        assert!(matches!(result, Err(CommerceError::Overflow)));
    }
}
