//! Product catalog module.
//!
//! Contains the fixed category set, product records, and the ordered
//! in-memory catalog the browse and home views read from.

mod category;
mod product;

pub use category::{Category, CategorySelection};
pub use product::Product;
pub(crate) use product::title_initial;

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The immutable, ordered product catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// The first `count` products, in catalog order.
    pub fn featured(&self, count: usize) -> &[Product] {
        &self.products[..count.min(self.products.len())]
    }

    /// All products as a slice.
    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Item {}", id), Money::usd(1000), Category::Books)
    }

    #[test]
    fn test_featured_is_prefix() {
        let catalog = Catalog::new(vec![product("1"), product("2"), product("3")]);
        let featured: Vec<&str> = catalog.featured(2).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, vec!["1", "2"]);
    }

    #[test]
    fn test_featured_larger_than_catalog() {
        let catalog = Catalog::new(vec![product("1")]);
        assert_eq!(catalog.featured(4).len(), 1);
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::new(vec![product("1"), product("2")]);
        assert_eq!(catalog.get(&ProductId::new("2")).map(|p| p.title.as_str()), Some("Item 2"));
        assert!(catalog.get(&ProductId::new("9")).is_none());
    }
}
