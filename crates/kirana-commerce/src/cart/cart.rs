//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{CartId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
///
/// Holds at most one line per product; quantities stay in `1..=MAX` after
/// every operation. Mutations never fail: out-of-range quantities clamp,
/// and a quantity driven to zero or below removes the line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            items: Vec::new(),
            currency: Currency::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a product to the cart.
    ///
    /// If the product is already present its quantity is incremented,
    /// otherwise a new line is appended with a snapshot of the product's
    /// name and price. Quantities clamp at `MAX_QUANTITY_PER_ITEM`; an
    /// increment that drives the quantity to zero or below removes the
    /// line, and a non-positive quantity for a new product is a no-op.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_quantity = existing
                .quantity
                .saturating_add(quantity)
                .min(MAX_QUANTITY_PER_ITEM);
            if new_quantity <= 0 {
                let product_id = product.id.clone();
                self.remove_item(&product_id);
            } else {
                existing.quantity = new_quantity;
                self.updated_at = current_timestamp();
            }
            return;
        }

        if quantity <= 0 {
            return;
        }

        self.items.push(LineItem::from_product(
            product,
            quantity.min(MAX_QUANTITY_PER_ITEM),
        ));
        self.updated_at = current_timestamp();
    }

    /// Set the quantity of a line directly.
    ///
    /// A quantity of zero or below removes the line. Returns whether the
    /// cart contained the product.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product_id == product_id) {
            item.quantity = quantity.min(MAX_QUANTITY_PER_ITEM);
            self.updated_at = current_timestamp();
            true
        } else {
            false
        }
    }

    /// Remove a line from the cart. A missing product is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.updated_at = current_timestamp();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product ID.
    pub fn find_item(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    /// Sum of line totals.
    ///
    /// Fails on a line priced in a different currency or on overflow.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        crate::cart::pricing::subtotal_of(&self.items, self.currency)
    }

    /// Merge another cart into this one (e.g., when a user logs in).
    ///
    /// Quantities of shared products add, capped at MAX_QUANTITY_PER_ITEM;
    /// products only in `other` are appended.
    pub fn merge(&mut self, other: Cart) {
        for item in other.items {
            if let Some(existing) = self
                .items
                .iter_mut()
                .find(|i| i.product_id == item.product_id)
            {
                existing.quantity = existing
                    .quantity
                    .saturating_add(item.quantity)
                    .min(MAX_QUANTITY_PER_ITEM);
            } else {
                self.items.push(item);
            }
        }
        self.updated_at = current_timestamp();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A line item in the cart.
///
/// Carries a snapshot of the product's display fields so the cart renders
/// without a catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at the time the line was created.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Image reference (denormalized for display).
    pub image: String,
}

impl LineItem {
    /// Create a line from a catalog product.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            image: product.image.clone(),
        }
    }

    /// unit_price * quantity, None on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity)
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
