//! Cart persistence for the Kirana storefront.
//!
//! Provides durable cart storage behind the `CartStore` trait, a
//! write-through `PersistentCart` wrapper, and best-effort sync with the
//! server-side cart document.
//!
//! # Example
//!
//! ```rust,ignore
//! use kirana_store::prelude::*;
//!
//! let mut cart = PersistentCart::open(Box::new(MemoryCartStore::new()));
//! cart.add_item(&product, 2);
//!
//! // After login, merge with the user's server-side cart.
//! sync_on_login(&mut cart, &remote, &user_id).await;
//! ```

mod cart_store;
mod error;
mod persistent;
mod sync;

pub use cart_store::{CartStore, MemoryCartStore};
pub use error::StoreError;
pub use persistent::PersistentCart;
pub use sync::{sync_on_login, RemoteCartSync};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        sync_on_login, CartStore, MemoryCartStore, PersistentCart, RemoteCartSync, StoreError,
    };
}
