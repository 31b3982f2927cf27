use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::logger::Logger;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, CatalogError> {
        let products = self.repository.get_all().await?;

        let products: Vec<Product> = match params.category {
            Some(category) => {
                self.logger
                    .info(&format!("Fetching products in category: {}", category));
                products
                    .into_iter()
                    .filter(|p| p.is_in_category(&category))
                    .collect()
            }
            None => {
                self.logger.info("Fetching all products");
                products
            }
        };

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
