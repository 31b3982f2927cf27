use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::{commit_store, open_store};
use crate::domain::cart::observer::CartObserver;
use crate::domain::cart::repository::CartRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{
    PAYMENT_CONFIRMED_MESSAGE, PaymentReceipt, is_successful_payment_status,
};
use crate::domain::checkout::use_cases::confirm_payment::{
    ConfirmPaymentParams, ConfirmPaymentUseCase,
};
use crate::domain::logger::Logger;

pub struct ConfirmPaymentUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub observers: Vec<Arc<dyn CartObserver>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConfirmPaymentUseCase for ConfirmPaymentUseCaseImpl {
    async fn execute(&self, params: ConfirmPaymentParams) -> Result<PaymentReceipt, CheckoutError> {
        let reference = params
            .reference
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty());

        if !is_successful_payment_status(params.status.as_deref()) {
            self.logger.warn(&format!(
                "Payment {} for session {} reported status {:?}",
                reference.as_deref().unwrap_or("-"),
                params.session_id,
                params.status
            ));
            return Err(CheckoutError::PaymentFailed);
        }

        let mut store = open_store(
            self.repository.as_ref(),
            &self.observers,
            &params.session_id,
        )
        .await?;
        store.clear_cart();
        commit_store(self.repository.as_ref(), store).await?;

        self.logger.info(&format!(
            "Payment {} confirmed for session {}",
            reference.as_deref().unwrap_or("-"),
            params.session_id
        ));
        Ok(PaymentReceipt {
            reference,
            message: PAYMENT_CONFIRMED_MESSAGE.to_string(),
        })
    }
}
