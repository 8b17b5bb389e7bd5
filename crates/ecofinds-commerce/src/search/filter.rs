//! Search filter predicates.

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};

/// A single predicate over products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Product is in exactly this category.
    Category(Category),
    /// Case-insensitive substring of the title or the description.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(category: Category) -> Self {
        Filter::Category(category)
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Test a product against this filter.
    ///
    /// An empty text filter matches every product.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(category) => product.category == *category,
            Filter::Text(query) => {
                let needle = query.to_lowercase();
                product.title.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn jacket() -> Product {
        Product::new("1", "Vintage Leather Jacket", Money::usd(4599), Category::Clothing)
            .with_description("Genuine leather jacket in excellent condition.")
    }

    #[test]
    fn test_text_matches_title_case_insensitive() {
        assert!(Filter::text("JACKET").matches(&jacket()));
        assert!(Filter::text("vintage").matches(&jacket()));
    }

    #[test]
    fn test_text_matches_description() {
        assert!(Filter::text("excellent").matches(&jacket()));
        assert!(!Filter::text("bamboo").matches(&jacket()));
    }

    #[test]
    fn test_empty_text_matches_everything() {
        assert!(Filter::text("").matches(&jacket()));
    }

    #[test]
    fn test_category() {
        assert!(Filter::category(Category::Clothing).matches(&jacket()));
        assert!(!Filter::category(Category::Electronics).matches(&jacket()));
    }
}
