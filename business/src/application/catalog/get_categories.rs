use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::categories_of;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_categories::GetCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetCategoriesUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, CatalogError> {
        self.logger.info("Fetching product categories");
        let products = self.repository.get_all().await?;
        Ok(categories_of(&products))
    }
}
