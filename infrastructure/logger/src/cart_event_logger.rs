use business::domain::cart::model::Cart;
use business::domain::cart::observer::CartObserver;
use business::domain::shared::value_objects::SessionId;
use tracing::debug;

/// Emits one debug event per cart mutation.
pub struct CartEventLogger;

impl CartObserver for CartEventLogger {
    fn on_cart_changed(&self, session_id: &SessionId, cart: &Cart) {
        debug!(
            target: "Storefront -- cart",
            session = %session_id,
            line_items = cart.items().len(),
            total_items = cart.total_items(),
            total_price = %cart.total_price(),
            "cart changed"
        );
    }
}
