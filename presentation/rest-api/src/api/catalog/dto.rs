use poem_openapi::Object;

use business::domain::catalog::model::Product;

use crate::api::money::format_price;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: String,
    pub name: String,
    /// Unit price with two decimals, e.g. "29.99"
    pub price: String,
    /// Image URL
    pub image: String,
    pub description: String,
    pub category: String,
    /// Whether the product can be added to the cart
    pub in_stock: bool,
    /// Average rating out of 5
    pub rating: f32,
    /// Number of reviews
    pub reviews: u32,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: format_price(&product.price),
            image: product.image.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            in_stock: product.in_stock,
            rating: product.rating,
            reviews: product.reviews,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}
