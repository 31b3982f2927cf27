use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::SessionId;

pub struct UpdateQuantityParams {
    pub session_id: SessionId,
    pub product_id: String,
    /// Absolute quantity. Values below 1 remove the product.
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<Cart, CartError>;
}
