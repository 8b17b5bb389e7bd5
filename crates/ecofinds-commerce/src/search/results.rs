//! Search result set.

use crate::catalog::Product;

/// Products that passed a [`SearchQuery`](crate::search::SearchQuery).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults<'a> {
    products: Vec<&'a Product>,
    catalog_size: usize,
}

impl<'a> SearchResults<'a> {
    pub(crate) fn new(products: Vec<&'a Product>, catalog_size: usize) -> Self {
        Self {
            products,
            catalog_size,
        }
    }

    /// Number of matching products.
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// True when nothing matched. The view shows "Clear Filters" then.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Size of the catalog that was searched.
    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    /// "1 product found" / "3 products found".
    pub fn summary(&self) -> String {
        let count = self.count();
        let plural = if count == 1 { "" } else { "s" };
        format!("{} product{} found", count, plural)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }

    pub fn into_products(self) -> Vec<&'a Product> {
        self.products
    }
}
