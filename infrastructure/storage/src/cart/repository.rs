use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

/// Session carts kept in process memory. Carts are dropped when emptied.
///
/// Entries never expire: one entry lives per session key holding a non-empty
/// cart until that cart is cleared or checked out, and callers choose their
/// own keys. Carts are not meant to outlive the process, so there is no
/// eviction.
#[derive(Default)]
pub struct CartRepositoryInMemory {
    carts: RwLock<HashMap<SessionId, Cart>>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently holding a non-empty cart.
    pub async fn active_sessions(&self) -> usize {
        self.carts.read().await.len()
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn load(&self, session_id: &SessionId) -> Result<Cart, RepositoryError> {
        Ok(self
            .carts
            .read()
            .await
            .get(session_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError> {
        let mut carts = self.carts.write().await;
        if cart.is_empty() {
            carts.remove(session_id);
        } else {
            carts.insert(session_id.clone(), cart.clone());
        }
        Ok(())
    }
}
