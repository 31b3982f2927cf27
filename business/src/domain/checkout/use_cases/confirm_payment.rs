use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::PaymentReceipt;
use crate::domain::shared::value_objects::SessionId;

pub struct ConfirmPaymentParams {
    pub session_id: SessionId,
    /// Gateway transaction reference, if the gateway sent one.
    pub reference: Option<String>,
    pub status: Option<String>,
}

#[async_trait]
pub trait ConfirmPaymentUseCase: Send + Sync {
    async fn execute(&self, params: ConfirmPaymentParams) -> Result<PaymentReceipt, CheckoutError>;
}
