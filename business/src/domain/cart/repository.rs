use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::Cart;

/// Session-scoped cart storage.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// The saved cart for `session_id`, or an empty cart for a new session.
    async fn load(&self, session_id: &SessionId) -> Result<Cart, RepositoryError>;
    async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError>;
}
