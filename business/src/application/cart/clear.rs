use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::{commit_store, open_store};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::observer::CartObserver;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub observers: Vec<Arc<dyn CartObserver>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Clearing cart of session {}", params.session_id));

        let mut store =
            open_store(self.repository.as_ref(), &self.observers, &params.session_id).await?;
        store.clear_cart();
        commit_store(self.repository.as_ref(), store).await?;
        Ok(())
    }
}
