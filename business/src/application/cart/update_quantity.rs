use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::{commit_store, open_store};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::observer::CartObserver;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateQuantityParams, UpdateQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub observers: Vec<Arc<dyn CartObserver>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateQuantityUseCase for UpdateQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of product {} to {} for session {}",
            params.product_id, params.quantity, params.session_id
        ));

        let mut store =
            open_store(self.repository.as_ref(), &self.observers, &params.session_id).await?;
        if params.quantity >= 1 && store.cart().get(&params.product_id).is_none() {
            self.logger.debug(&format!(
                "Product {} not in cart, quantity update ignored",
                params.product_id
            ));
        }
        store.update_quantity(&params.product_id, params.quantity);
        let cart = commit_store(self.repository.as_ref(), store).await?;
        Ok(cart)
    }
}
