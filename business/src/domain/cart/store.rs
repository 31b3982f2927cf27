use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::SessionId;

use super::model::{Cart, LineItem};
use super::observer::{CartObserver, SubscriptionId};

/// The authoritative cart of one session plus the observers watching it.
///
/// Every mutating operation notifies all subscribers once, in subscription
/// order, after the change is applied. Queries never notify.
pub struct CartStore {
    session_id: SessionId,
    cart: Cart,
    subscribers: Vec<(SubscriptionId, Arc<dyn CartObserver>)>,
    next_subscription: u64,
}

impl CartStore {
    /// An empty cart for a new session.
    pub fn new(session_id: SessionId) -> Self {
        Self::from_cart(session_id, Cart::new())
    }

    /// Restores a previously saved cart.
    pub fn from_cart(session_id: SessionId, cart: Cart) -> Self {
        Self {
            session_id,
            cart,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn into_cart(self) -> Cart {
        self.cart
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn subscribe(&mut self, observer: Arc<dyn CartObserver>) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, observer));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscription, _)| *subscription != id);
        self.subscribers.len() != before
    }

    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.add(product);
        self.notify();
    }

    /// Removing an absent product is a no-op (subscribers are still notified).
    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove(product_id);
        self.notify();
    }

    /// Sets the absolute quantity of a product already in the cart.
    ///
    /// `quantity < 1` removes the product. A product not in the cart is left
    /// absent.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
        self.notify();
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.notify();
    }

    pub fn total_price(&self) -> BigDecimal {
        self.cart.total_price()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    fn notify(&self) {
        for (_, observer) in &self.subscribers {
            observer.on_cart_changed(&self.session_id, &self.cart);
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("session_id", &self.session_id)
            .field("cart", &self.cart)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use num_traits::Zero;

    use super::*;
    use crate::domain::catalog::model::fixtures::product;

    fn store() -> CartStore {
        CartStore::new(SessionId::new("test-session"))
    }

    fn counter(store: &mut CartStore) -> (Arc<AtomicUsize>, SubscriptionId) {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let id = store.subscribe(Arc::new(move |_: &SessionId, _: &Cart| {
            seen.fetch_add(1, Ordering::SeqCst);
        }));
        (calls, id)
    }

    #[test]
    fn should_hold_one_line_item_per_product() {
        let mut store = store();
        let wallet = product("5", "49.99", "Accessories");

        for _ in 0..4 {
            store.add_to_cart(wallet.clone());
        }

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.total_items(), 4);
    }

    #[test]
    fn should_hold_distinct_line_items_for_distinct_products() {
        let mut store = store();

        store.add_to_cart(product("1", "299.99", "Electronics"));
        store.add_to_cart(product("2", "199.99", "Electronics"));

        assert_eq!(store.items().len(), 2);
        assert_eq!(store.total_items(), 2);
    }

    #[test]
    fn should_remove_when_quantity_updated_to_zero() {
        let mut store = store();
        store.add_to_cart(product("1", "299.99", "Electronics"));

        store.update_quantity("1", 0);

        assert!(store.cart().get("1").is_none());
    }

    #[test]
    fn should_leave_cart_unchanged_when_removing_absent_product() {
        let mut store = store();
        store.add_to_cart(product("1", "299.99", "Electronics"));
        let before = store.cart().clone();

        store.remove_from_cart("missing");

        assert_eq!(store.cart(), &before);
    }

    #[test]
    fn should_compute_exact_total_price() {
        let mut store = store();
        let shirt = product("3", "29.99", "Clothing");
        store.add_to_cart(shirt.clone());
        store.add_to_cart(shirt);
        store.add_to_cart(product("2", "199.99", "Electronics"));

        assert_eq!(store.total_price(), BigDecimal::from_str("259.97").unwrap());
    }

    #[test]
    fn should_report_zero_totals_after_clear() {
        let mut store = store();
        store.add_to_cart(product("1", "299.99", "Electronics"));

        store.clear_cart();

        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), BigDecimal::zero());
    }

    #[test]
    fn should_walk_through_add_update_remove_scenario() {
        let mut store = store();
        let p1 = product("p1", "49.99", "Accessories");

        store.add_to_cart(p1.clone());
        store.add_to_cart(p1);
        assert_eq!(store.cart().get("p1").unwrap().quantity(), 2);

        store.update_quantity("p1", 5);
        assert_eq!(store.cart().get("p1").unwrap().quantity(), 5);
        assert_eq!(store.total_price(), BigDecimal::from_str("249.95").unwrap());

        store.remove_from_cart("p1");
        assert!(store.items().is_empty());
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), BigDecimal::zero());
    }

    #[test]
    fn should_notify_once_per_mutation() {
        let mut store = store();
        let (calls, _) = counter(&mut store);

        store.add_to_cart(product("1", "299.99", "Electronics"));
        store.update_quantity("1", 3);
        store.remove_from_cart("missing");
        store.clear_cart();
        let _ = store.total_price();
        let _ = store.total_items();

        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn should_pass_resulting_cart_to_observers() {
        let mut store = store();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(Arc::new(move |session: &SessionId, cart: &Cart| {
            sink.lock()
                .unwrap()
                .push((session.to_string(), cart.total_items()));
        }));

        store.add_to_cart(product("1", "299.99", "Electronics"));
        store.add_to_cart(product("1", "299.99", "Electronics"));

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                ("test-session".to_string(), 1),
                ("test-session".to_string(), 2)
            ]
        );
    }

    #[test]
    fn should_stop_notifying_after_unsubscribe() {
        let mut store = store();
        let (calls, id) = counter(&mut store);

        store.add_to_cart(product("1", "299.99", "Electronics"));
        assert!(store.unsubscribe(id));
        store.clear_cart();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn should_issue_distinct_subscription_ids() {
        let mut store = store();
        let (_, first) = counter(&mut store);
        let (_, second) = counter(&mut store);

        assert_ne!(first, second);
    }

    #[test]
    fn should_restore_saved_cart() {
        let mut cart = Cart::new();
        cart.add(product("1", "299.99", "Electronics"));

        let store = CartStore::from_cart(SessionId::new("s"), cart.clone());

        assert_eq!(store.cart(), &cart);
        assert_eq!(store.into_cart(), cart);
    }
}
