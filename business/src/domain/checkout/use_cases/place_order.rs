use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{CheckoutForm, OrderConfirmation};
use crate::domain::shared::value_objects::SessionId;

pub struct PlaceOrderParams {
    pub session_id: SessionId,
    pub form: CheckoutForm,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderConfirmation, CheckoutError>;
}
