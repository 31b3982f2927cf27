use std::sync::Arc;

use logger::{CartEventLogger, TracingLogger};
use relay::{RelayClient, RelayServiceReqwest};
use storage::cart::repository::CartRepositoryInMemory;
use storage::catalog::repository::CatalogRepositoryInMemory;

use business::application::cart::add::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove::RemoveFromCartUseCaseImpl;
use business::application::cart::update_quantity::UpdateQuantityUseCaseImpl;
use business::application::catalog::get_all::GetAllProductsUseCaseImpl;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::get_categories::GetCategoriesUseCaseImpl;
use business::application::checkout::confirm_payment::ConfirmPaymentUseCaseImpl;
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;
use business::application::relay::forward::ForwardRequestUseCaseImpl;
use business::domain::cart::observer::CartObserver;
use business::domain::relay::use_cases::forward::ForwardRequestUseCase;

use crate::api::cart::routes::CartApi;
use crate::api::catalog::routes::CatalogApi;
use crate::api::checkout::routes::CheckoutApi;
use crate::api::health::routes::HealthApi;
use crate::config::relay_config::RelayConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub catalog_api: CatalogApi,
    pub cart_api: CartApi,
    pub checkout_api: CheckoutApi,
    pub forward_use_case: Arc<dyn ForwardRequestUseCase>,
}

impl DependencyContainer {
    pub fn new(relay_config: &RelayConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let catalog_repository = Arc::new(CatalogRepositoryInMemory::seeded()?);
        let cart_repository = Arc::new(CartRepositoryInMemory::new());
        let relay_service = Arc::new(RelayServiceReqwest::new(RelayClient::new(
            relay_config.timeout,
        )?));
        let observers: Vec<Arc<dyn CartObserver>> = vec![Arc::new(CartEventLogger)];

        // Catalog use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: catalog_repository,
            observers: observers.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart_use_case = Arc::new(RemoveFromCartUseCaseImpl {
            repository: cart_repository.clone(),
            observers: observers.clone(),
            logger: logger.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            observers: observers.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            observers: observers.clone(),
            logger: logger.clone(),
        });

        // Checkout use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            repository: cart_repository.clone(),
            observers: observers.clone(),
            logger: logger.clone(),
        });
        let confirm_payment_use_case = Arc::new(ConfirmPaymentUseCaseImpl {
            repository: cart_repository,
            observers,
            logger: logger.clone(),
        });

        // Relay use case
        let forward_use_case: Arc<dyn ForwardRequestUseCase> =
            Arc::new(ForwardRequestUseCaseImpl {
                service: relay_service,
                allowed_hosts: relay_config.allowed_hosts.clone(),
                logger,
            });

        let catalog_api =
            CatalogApi::new(get_all_use_case, get_by_id_use_case, get_categories_use_case);
        let cart_api = CartApi::new(
            get_cart_use_case,
            add_to_cart_use_case,
            remove_from_cart_use_case,
            update_quantity_use_case,
            clear_cart_use_case,
        );
        let checkout_api = CheckoutApi::new(place_order_use_case, confirm_payment_use_case);

        Ok(Self {
            health_api,
            catalog_api,
            cart_api,
            checkout_api,
            forward_use_case,
        })
    }
}
