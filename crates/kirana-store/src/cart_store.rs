//! Durable cart storage.

use crate::StoreError;
use kirana_commerce::cart::Cart;
use std::sync::{Arc, Mutex};

/// Durable storage for the active cart.
///
/// Implementations hold the whole cart as one document, the way a browser
/// storage slot or a KV entry keyed by session does. `load` returns `None`
/// when nothing has been saved yet.
pub trait CartStore: Send + Sync {
    /// Load the saved cart, if any.
    fn load(&self) -> Result<Option<Cart>, StoreError>;

    /// Save the cart, replacing any previous document.
    fn save(&self, cart: &Cart) -> Result<(), StoreError>;

    /// Remove the saved cart.
    fn clear(&self) -> Result<(), StoreError>;
}

impl<S: CartStore + ?Sized> CartStore for Arc<S> {
    fn load(&self) -> Result<Option<Cart>, StoreError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        (**self).save(cart)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// In-memory store holding the cart as a JSON document.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    slot: Mutex<Option<String>>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a cart document is currently stored.
    pub fn has_saved(&self) -> bool {
        self.slot.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self) -> Result<Option<Cart>, StoreError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))?;
        match slot.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let json = serde_json::to_string(cart)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))?;
        *slot = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Backend("store mutex poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kirana_commerce::catalog::Product;
    use kirana_commerce::money::{Currency, Money};

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        let product = Product::new(
            "p-rice",
            "Basmati Rice 1kg",
            Money::new(18000, Currency::INR),
        );
        cart.add_item(&product, 2);
        cart
    }

    #[test]
    fn test_empty_store_loads_none() {
        let store = MemoryCartStore::new();
        assert!(store.load().unwrap().is_none());
        assert!(!store.has_saved());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = MemoryCartStore::new();
        let cart = sample_cart();

        store.save(&cart).unwrap();
        assert!(store.has_saved());

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, cart);
    }

    #[test]
    fn test_save_replaces_previous_document() {
        let store = MemoryCartStore::new();
        let mut cart = sample_cart();
        store.save(&cart).unwrap();

        cart.clear();
        store.save(&cart).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_clear_removes_document() {
        let store = MemoryCartStore::new();
        store.save(&sample_cart()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
