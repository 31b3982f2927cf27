use poem_openapi::Object;

use business::domain::cart::model::{Cart, LineItem};

use crate::api::catalog::dto::ProductResponse;
use crate::api::money::format_price;

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    /// Catalog product to add. An existing line item is incremented by one.
    pub product_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// Absolute quantity. Anything below 1 removes the line item.
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct LineItemResponse {
    pub product: ProductResponse,
    pub quantity: u32,
    /// price × quantity, two decimals
    pub subtotal: String,
}

impl From<&LineItem> for LineItemResponse {
    fn from(item: &LineItem) -> Self {
        Self {
            product: item.product().into(),
            quantity: item.quantity(),
            subtotal: format_price(&item.subtotal()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Line items in the order they were first added
    pub items: Vec<LineItemResponse>,
    /// Sum of all quantities
    pub total_items: u64,
    /// Exact sum of all subtotals, two decimals
    pub total_price: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(LineItemResponse::from).collect(),
            total_items: cart.total_items(),
            total_price: format_price(&cart.total_price()),
        }
    }
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self::from(&cart)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use business::domain::catalog::model::{NewProductProps, Product};

    use super::*;

    fn product(id: &str, price: &str) -> Product {
        Product::new(NewProductProps {
            id: id.to_string(),
            name: format!("Product {id}"),
            price: BigDecimal::from_str(price).unwrap(),
            image: String::new(),
            description: String::new(),
            category: "Clothing".to_string(),
            in_stock: true,
            rating: 4.0,
            reviews: 1,
        })
        .unwrap()
    }

    #[test]
    fn should_render_totals_with_two_decimals() {
        let mut cart = Cart::new();
        cart.add(product("3", "29.99"));
        cart.add(product("3", "29.99"));
        cart.add(product("2", "199.99"));

        let response = CartResponse::from(&cart);

        assert_eq!(response.total_price, "259.97");
        assert_eq!(response.total_items, 3);
        assert_eq!(response.items[0].product.id, "3");
        assert_eq!(response.items[0].subtotal, "59.98");
        assert_eq!(response.items[1].quantity, 1);
    }

    #[test]
    fn should_render_empty_cart_as_zero() {
        let response = CartResponse::from(Cart::new());

        assert!(response.items.is_empty());
        assert_eq!(response.total_items, 0);
        assert_eq!(response.total_price, "0.00");
    }
}
