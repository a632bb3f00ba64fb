//! Cart with write-through persistence.

use crate::cart_store::CartStore;
use kirana_commerce::cart::Cart;
use kirana_commerce::catalog::Product;
use kirana_commerce::ids::ProductId;

/// A cart that persists itself after every mutation.
///
/// Save failures are demoted to warnings; the in-memory cart stays
/// authoritative so shopping never blocks on storage.
pub struct PersistentCart {
    cart: Cart,
    store: Box<dyn CartStore>,
}

impl PersistentCart {
    /// Open the store and restore any saved cart. An unreadable document
    /// starts a fresh cart.
    pub fn open(store: Box<dyn CartStore>) -> Self {
        let cart = match store.load() {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not restore saved cart, starting empty");
                Cart::new()
            }
        };
        Self { cart, store }
    }

    /// The live cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a product, merging quantities as the cart does.
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        self.cart.add_item(product, quantity);
        self.persist();
    }

    /// Set a line's quantity. Returns false if the product is not in the
    /// cart.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        let found = self.cart.update_quantity(product_id, quantity);
        self.persist();
        found
    }

    /// Remove a line. Returns false if the product is not in the cart.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove_item(product_id);
        self.persist();
        removed
    }

    /// Empty the cart and drop the saved document.
    pub fn clear(&mut self) {
        self.cart.clear();
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Could not clear saved cart");
        }
    }

    /// Replace the cart wholesale (after a merge) and persist.
    pub fn replace(&mut self, cart: Cart) {
        self.cart = cart;
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.cart) {
            tracing::warn!(error = %e, "Could not save cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart_store::MemoryCartStore;
    use crate::StoreError;
    use kirana_commerce::money::{Currency, Money};
    use std::sync::Arc;

    fn product(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::new(price_cents, Currency::INR))
    }

    /// Store whose writes always fail.
    struct FailingStore;

    impl CartStore for FailingStore {
        fn load(&self) -> Result<Option<Cart>, StoreError> {
            Err(StoreError::Backend("store offline".to_string()))
        }

        fn save(&self, _cart: &Cart) -> Result<(), StoreError> {
            Err(StoreError::Backend("store offline".to_string()))
        }

        fn clear(&self) -> Result<(), StoreError> {
            Err(StoreError::Backend("store offline".to_string()))
        }
    }

    #[test]
    fn test_open_starts_empty_without_saved_cart() {
        let cart = PersistentCart::open(Box::new(MemoryCartStore::new()));
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn test_mutations_write_through() {
        let store = Arc::new(MemoryCartStore::new());
        let mut cart = PersistentCart::open(Box::new(store.clone()));

        cart.add_item(&product("p-dal", 9000), 2);
        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.item_count(), 2);

        assert!(cart.update_quantity(&"p-dal".into(), 5));
        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.item_count(), 5);

        assert!(cart.remove_item(&"p-dal".into()));
        let saved = store.load().unwrap().unwrap();
        assert!(saved.is_empty());
    }

    #[test]
    fn test_open_restores_saved_cart() {
        let store = Arc::new(MemoryCartStore::new());
        {
            let mut cart = PersistentCart::open(Box::new(store.clone()));
            cart.add_item(&product("p-atta", 25000), 1);
        }

        // A new wrapper over the same store picks the cart back up.
        let restored = PersistentCart::open(Box::new(store));
        assert_eq!(restored.cart().item_count(), 1);
        assert_eq!(
            restored.cart().items[0].unit_price,
            Money::new(25000, Currency::INR)
        );
    }

    #[test]
    fn test_clear_drops_saved_document() {
        let store = Arc::new(MemoryCartStore::new());
        let mut cart = PersistentCart::open(Box::new(store.clone()));
        cart.add_item(&product("p-ghee", 45000), 1);

        cart.clear();
        assert!(cart.cart().is_empty());
        assert!(!store.has_saved());
    }

    #[test]
    fn test_store_failures_never_block_shopping() {
        let mut cart = PersistentCart::open(Box::new(FailingStore));
        assert!(cart.cart().is_empty());

        cart.add_item(&product("p-tea", 15000), 3);
        assert_eq!(cart.cart().item_count(), 3);

        cart.clear();
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn test_replace_persists() {
        let store = Arc::new(MemoryCartStore::new());
        let mut cart = PersistentCart::open(Box::new(store.clone()));

        let mut merged = Cart::new();
        merged.add_item(&product("p-jaggery", 8000), 4);
        cart.replace(merged);

        assert_eq!(store.load().unwrap().unwrap().item_count(), 4);
    }
}
