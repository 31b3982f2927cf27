use bigdecimal::BigDecimal;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{NewProductProps, Product};

/// Product row as stored in the catalog seed.
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub in_stock: bool,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, CatalogError> {
        Product::new(NewProductProps {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            description: self.description,
            category: self.category,
            in_stock: self.in_stock,
            rating: self.rating,
            reviews: self.reviews,
        })
    }
}
