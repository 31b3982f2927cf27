#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.product_id_empty")]
    IdEmpty,
    #[error("catalog.product_name_empty")]
    NameEmpty,
    #[error("catalog.negative_price")]
    NegativePrice,
    #[error("catalog.product_not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
