use async_trait::async_trait;

use business::domain::catalog::model::Product;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;

use super::entity::ProductEntity;
use crate::errors::StorageError;

const SEED: &str = include_str!("../../data/products.json");

/// Read-only catalog held in memory, loaded once at startup.
pub struct CatalogRepositoryInMemory {
    products: Vec<Product>,
}

impl CatalogRepositoryInMemory {
    /// The storefront's built-in product list.
    pub fn seeded() -> Result<Self, StorageError> {
        Self::from_json(SEED)
    }

    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let entities: Vec<ProductEntity> = serde_json::from_str(raw)?;
        let products = entities
            .into_iter()
            .map(|entity| {
                let id = entity.id.clone();
                entity
                    .into_domain()
                    .map_err(|source| StorageError::SeedInvalidProduct { id, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!("Catalog loaded with {} products", products.len());
        Ok(Self { products })
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}
