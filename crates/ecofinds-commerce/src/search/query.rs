//! Search query builder.

use crate::catalog::{CategorySelection, Product};
use crate::search::{Filter, SearchResults};

/// The browse view's filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Selected category, `All` by default.
    pub category: CategorySelection,
    /// Free-text query, used verbatim.
    pub text: String,
}

impl SearchQuery {
    /// Create an unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: impl Into<CategorySelection>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Whether any filter narrows the catalog.
    pub fn is_filtered(&self) -> bool {
        self.category != CategorySelection::All || !self.text.is_empty()
    }

    /// Reset to the unfiltered state ("Clear Filters").
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The active predicates. Both must hold for a product to match.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(2);
        if let CategorySelection::Only(category) = self.category {
            filters.push(Filter::Category(category));
        }
        if !self.text.is_empty() {
            filters.push(Filter::Text(self.text.clone()));
        }
        filters
    }

    /// Run the query over products, keeping their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> SearchResults<'a> {
        let filters = self.filters();
        let matched = products
            .iter()
            .filter(|p| filters.iter().all(|f| f.matches(p)))
            .collect();
        SearchResults::new(matched, products.len())
    }
}

/// Filter `catalog` by category selection and free-text query.
///
/// Returns the matching products in catalog order.
pub fn filter_products<'a>(
    catalog: &'a [Product],
    selection: CategorySelection,
    query: &str,
) -> Vec<&'a Product> {
    SearchQuery::new()
        .with_category(selection)
        .with_text(query)
        .apply(catalog)
        .into_products()
}
