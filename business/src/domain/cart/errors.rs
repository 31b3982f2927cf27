#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.product_out_of_stock")]
    ProductOutOfStock,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
