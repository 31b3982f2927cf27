use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::{commit_store, open_store};
use crate::domain::cart::observer::CartObserver;
use crate::domain::cart::repository::CartRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::OrderConfirmation;
use crate::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::logger::Logger;

pub struct PlaceOrderUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub observers: Vec<Arc<dyn CartObserver>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderConfirmation, CheckoutError> {
        self.logger
            .info(&format!("Placing order for session {}", params.session_id));

        let (customer, payment_method) = params.form.validate().inspect_err(|err| {
            self.logger.warn(&format!(
                "Checkout rejected for session {}: {}",
                params.session_id, err
            ));
        })?;

        let mut store = open_store(
            self.repository.as_ref(),
            &self.observers,
            &params.session_id,
        )
        .await?;
        let confirmation = OrderConfirmation::new(store.cart(), customer, payment_method);
        store.clear_cart();
        commit_store(self.repository.as_ref(), store).await?;

        self.logger.info(&format!(
            "Order {} placed: {} items, total {}, paid by {}",
            confirmation.reference,
            confirmation.total_items,
            confirmation.total_price,
            confirmation.payment_method
        ));
        Ok(confirmation)
    }
}
