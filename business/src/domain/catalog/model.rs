use bigdecimal::BigDecimal;
use num_traits::Signed;

use super::errors::CatalogError;

/// Category label that selects every product.
pub const ALL_CATEGORIES: &str = "All";

/// A sellable product. Read-only to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
    pub image: String,
    pub description: String,
    pub category: String,
    pub in_stock: bool,
    pub rating: f32,
    pub reviews: u32,
}

pub struct NewProductProps {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
    pub image: String,
    pub description: String,
    pub category: String,
    pub in_stock: bool,
    pub rating: f32,
    pub reviews: u32,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, CatalogError> {
        if props.id.trim().is_empty() {
            return Err(CatalogError::IdEmpty);
        }
        if props.name.trim().is_empty() {
            return Err(CatalogError::NameEmpty);
        }
        if props.price.is_negative() {
            return Err(CatalogError::NegativePrice);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            price: props.price,
            image: props.image,
            description: props.description,
            category: props.category,
            in_stock: props.in_stock,
            rating: props.rating,
            reviews: props.reviews,
        })
    }

    /// Whether this product is listed under `category`.
    /// [`ALL_CATEGORIES`] matches every product.
    pub fn is_in_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }
}

/// Category labels for a product listing: [`ALL_CATEGORIES`] first, then each
/// distinct label in order of first appearance.
pub fn categories_of(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !categories.contains(&product.category) {
            categories.push(product.category.clone());
        }
    }
    categories
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::str::FromStr;

    use super::*;

    pub fn product(id: &str, price: &str, category: &str) -> Product {
        Product::new(NewProductProps {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: BigDecimal::from_str(price).unwrap(),
            image: format!("https://img.example/{}.jpg", id),
            description: String::new(),
            category: category.to_string(),
            in_stock: true,
            rating: 4.5,
            reviews: 10,
        })
        .unwrap()
    }
}
