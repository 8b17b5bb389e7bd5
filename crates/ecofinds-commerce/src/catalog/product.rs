//! Product records.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A second-hand item offered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Title shown on cards.
    pub title: String,
    /// Asking price.
    pub price: Money,
    /// Catalog category.
    pub category: Category,
    /// Free-text description, searched alongside the title.
    pub description: String,
    /// Seller display name.
    pub seller: String,
    /// Optional image URL. Cards fall back to the title initial.
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Create a product with an empty description and seller.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            category,
            description: String::new(),
            seller: String::new(),
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_seller(mut self, seller: impl Into<String>) -> Self {
        self.seller = seller.into();
        self
    }

    /// Uppercased first character of the title, used as placeholder art.
    pub fn initial(&self) -> String {
        title_initial(&self.title)
    }
}

/// Uppercased first character of a title, or an empty string.
pub(crate) fn title_initial(title: &str) -> String {
    title
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
