use business::domain::catalog::errors::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.seed_unreadable: {0}")]
    SeedUnreadable(#[from] serde_json::Error),
    #[error("storage.seed_invalid_product: {id} ({source})")]
    SeedInvalidProduct { id: String, source: CatalogError },
}
