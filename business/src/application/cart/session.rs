use std::sync::Arc;

use crate::domain::cart::model::Cart;
use crate::domain::cart::observer::CartObserver;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::store::CartStore;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

/// Loads the session's cart into a store subscribed by `observers`.
pub(crate) async fn open_store(
    repository: &dyn CartRepository,
    observers: &[Arc<dyn CartObserver>],
    session_id: &SessionId,
) -> Result<CartStore, RepositoryError> {
    let cart = repository.load(session_id).await?;
    let mut store = CartStore::from_cart(session_id.clone(), cart);
    for observer in observers {
        store.subscribe(observer.clone());
    }
    Ok(store)
}

/// Persists the store's cart and hands it back.
pub(crate) async fn commit_store(
    repository: &dyn CartRepository,
    store: CartStore,
) -> Result<Cart, RepositoryError> {
    repository.save(store.session_id(), store.cart()).await?;
    Ok(store.into_cart())
}
