use crate::domain::shared::value_objects::SessionId;

use super::model::Cart;

/// Receives the resulting cart after every mutation of a [`CartStore`].
///
/// Called synchronously on the mutating thread. Implementations must not block.
///
/// [`CartStore`]: super::store::CartStore
pub trait CartObserver: Send + Sync {
    fn on_cart_changed(&self, session_id: &SessionId, cart: &Cart);
}

impl<F> CartObserver for F
where
    F: Fn(&SessionId, &Cart) + Send + Sync,
{
    fn on_cart_changed(&self, session_id: &SessionId, cart: &Cart) {
        self(session_id, cart)
    }
}

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
///
/// [`CartStore::subscribe`]: super::store::CartStore::subscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}
