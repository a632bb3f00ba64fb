//! Best-effort remote cart sync.
//!
//! The server keeps one cart document per user, insert-or-replace. Sync is
//! never allowed to break shopping: every remote failure is logged and the
//! local cart stays authoritative.

use crate::persistent::PersistentCart;
use crate::StoreError;
use async_trait::async_trait;
use kirana_commerce::cart::Cart;
use kirana_commerce::ids::UserId;

/// Server-side cart document store.
#[async_trait]
pub trait RemoteCartSync: Send + Sync {
    /// Fetch the user's saved cart, if any.
    async fn fetch(&self, user_id: &UserId) -> Result<Option<Cart>, StoreError>;

    /// Insert or replace the user's saved cart.
    async fn push(&self, user_id: &UserId, cart: &Cart) -> Result<(), StoreError>;
}

/// Merge the local cart with the user's remote cart after login, then push
/// the result back.
///
/// The local cart is the base: remote lines are merged in, adding
/// quantities for products present on both sides. A fetch failure skips
/// the push so an unreadable remote cart is not overwritten.
pub async fn sync_on_login(
    local: &mut PersistentCart,
    remote: &dyn RemoteCartSync,
    user_id: &UserId,
) {
    match remote.fetch(user_id).await {
        Ok(Some(remote_cart)) => {
            let mut merged = local.cart().clone();
            merged.merge(remote_cart);
            local.replace(merged);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Could not fetch remote cart, keeping local");
            return;
        }
    }

    if let Err(e) = remote.push(user_id, local.cart()).await {
        tracing::warn!(error = %e, "Could not push cart to server");
    }
}
