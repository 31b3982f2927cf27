use bigdecimal::BigDecimal;
use num_traits::Zero;

use crate::domain::catalog::model::Product;

/// One product in the cart together with how many units of it are held.
///
/// The quantity is never below 1 while the item is in a [`Cart`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    product: Product,
    quantity: u32,
}

impl LineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price * quantity`, unrounded.
    pub fn subtotal(&self) -> BigDecimal {
        &self.product.price * BigDecimal::from(self.quantity)
    }
}

/// Line items of one session in insertion order, at most one per product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product.id == product_id)
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product.id == product_id)
    }

    /// Increments the quantity of `product` or appends it with quantity 1.
    pub fn add(&mut self, product: Product) {
        match self.position(&product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
            }
            None => self.items.push(LineItem::new(product)),
        }
    }

    /// Removes the line item for `product_id`. Returns whether one was present.
    pub fn remove(&mut self, product_id: &str) -> bool {
        match self.position(product_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sets an absolute quantity.
    ///
    /// A quantity below 1 removes the item. Unknown products are ignored.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity < 1 {
            self.remove(product_id);
            return;
        }
        if let Some(index) = self.position(product_id) {
            self.items[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of `price * quantity` over all line items. No rounding is applied.
    pub fn total_price(&self) -> BigDecimal {
        self.items
            .iter()
            .fold(BigDecimal::zero(), |total, item| total + item.subtotal())
    }

    /// Number of units in the cart, not of distinct products.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
