use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::{commit_store, open_store};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::observer::CartObserver;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove::{RemoveFromCartParams, RemoveFromCartUseCase};
use crate::domain::logger::Logger;

pub struct RemoveFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub observers: Vec<Arc<dyn CartObserver>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart of session {}",
            params.product_id, params.session_id
        ));

        let mut store =
            open_store(self.repository.as_ref(), &self.observers, &params.session_id).await?;
        store.remove_from_cart(&params.product_id);
        let cart = commit_store(self.repository.as_ref(), store).await?;
        Ok(cart)
    }
}
