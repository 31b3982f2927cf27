use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;

#[async_trait]
pub trait GetCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, CatalogError>;
}
