use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::{commit_store, open_store};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::observer::CartObserver;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add::{AddToCartParams, AddToCartUseCase};
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub observers: Vec<Arc<dyn CartObserver>>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart of session {}",
            params.product_id, params.session_id
        ));

        let product = self
            .catalog
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.in_stock {
            self.logger.warn(&format!(
                "Rejected out of stock product {} for session {}",
                product.id, params.session_id
            ));
            return Err(CartError::ProductOutOfStock);
        }

        let mut store =
            open_store(self.repository.as_ref(), &self.observers, &params.session_id).await?;
        store.add_to_cart(product);
        let cart = commit_store(self.repository.as_ref(), store).await?;

        self.logger.info(&format!(
            "Cart of session {} now holds {} items",
            params.session_id,
            cart.total_items()
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::application::cart::session::test_support::{
        RecordingCartRepo, SilentLogger, test_session_id,
    };
    use crate::domain::catalog::model::Product;
    use crate::domain::catalog::model::fixtures::product;
    use crate::domain::shared::value_objects::SessionId;
    use mockall::mock;

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &str) -> Result<Product, RepositoryError>;
        }
    }

    fn catalog_with(found: Product) -> Arc<dyn CatalogRepository> {
        let mut mock_catalog = MockCatalogRepo::new();
        mock_catalog
            .expect_get_by_id()
            .returning(move |_| Ok(found.clone()));
        Arc::new(mock_catalog)
    }

    fn params(product_id: &str) -> AddToCartParams {
        AddToCartParams {
            session_id: test_session_id(),
            product_id: product_id.to_string(),
        }
    }

    #[tokio::test]
    async fn should_insert_new_line_item() {
        let repository = Arc::new(RecordingCartRepo::default());

        let use_case = AddToCartUseCaseImpl {
            repository: repository.clone(),
            catalog: catalog_with(product("1", "299.99", "Electronics")),
            observers: vec![],
            logger: Arc::new(SilentLogger),
        };

        let cart = use_case.execute(params("1")).await.unwrap();

        assert_eq!(cart.get("1").unwrap().quantity(), 1);
        assert_eq!(repository.current(), cart);
        assert_eq!(repository.save_count(), 1);
    }

    #[tokio::test]
    async fn should_accumulate_quantity_over_repeated_adds() {
        let repository = Arc::new(RecordingCartRepo::default());

        let use_case = AddToCartUseCaseImpl {
            repository: repository.clone(),
            catalog: catalog_with(product("5", "49.99", "Accessories")),
            observers: vec![],
            logger: Arc::new(SilentLogger),
        };

        for _ in 0..3 {
            use_case.execute(params("5")).await.unwrap();
        }

        let cart = repository.current();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[tokio::test]
    async fn should_notify_observers_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let observer: Arc<dyn CartObserver> = Arc::new(move |_: &SessionId, _: &Cart| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        let use_case = AddToCartUseCaseImpl {
            repository: Arc::new(RecordingCartRepo::default()),
            catalog: catalog_with(product("1", "299.99", "Electronics")),
            observers: vec![observer],
            logger: Arc::new(SilentLogger),
        };

        use_case.execute(params("1")).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_reject_unknown_product() {
        let mut mock_catalog = MockCatalogRepo::new();
        mock_catalog
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let repository = Arc::new(RecordingCartRepo::default());

        let use_case = AddToCartUseCaseImpl {
            repository: repository.clone(),
            catalog: Arc::new(mock_catalog),
            observers: vec![],
            logger: Arc::new(SilentLogger),
        };

        let result = use_case.execute(params("missing")).await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
        assert_eq!(repository.save_count(), 0);
    }

    #[tokio::test]
    async fn should_reject_out_of_stock_product() {
        let mut coffee_maker = product("6", "129.99", "Home & Kitchen");
        coffee_maker.in_stock = false;
        let repository = Arc::new(RecordingCartRepo::default());

        let use_case = AddToCartUseCaseImpl {
            repository: repository.clone(),
            catalog: catalog_with(coffee_maker),
            observers: vec![],
            logger: Arc::new(SilentLogger),
        };

        let result = use_case.execute(params("6")).await;

        assert!(matches!(result.unwrap_err(), CartError::ProductOutOfStock));
        assert!(repository.current().is_empty());
    }
}
