//! The fixed category set used for catalog filtering.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothing,
    Electronics,
    Home,
    Books,
    Automotive,
    Gaming,
    Baby,
    Sports,
}

impl Category {
    /// Every category, in the order the filter sidebar shows them.
    pub const ALL: [Category; 8] = [
        Category::Clothing,
        Category::Electronics,
        Category::Home,
        Category::Books,
        Category::Automotive,
        Category::Gaming,
        Category::Baby,
        Category::Sports,
    ];

    /// Stable id used in URLs and fixtures.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Clothing => "clothing",
            Category::Electronics => "electronics",
            Category::Home => "home",
            Category::Books => "books",
            Category::Automotive => "automotive",
            Category::Gaming => "gaming",
            Category::Baby => "baby",
            Category::Sports => "sports",
        }
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
            Category::Home => "Home & Garden",
            Category::Books => "Books",
            Category::Automotive => "Automotive",
            Category::Gaming => "Gaming",
            Category::Baby => "Baby & Kids",
            Category::Sports => "Sports",
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The browse view's category choice: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    /// Sentinel id for [`CategorySelection::All`].
    pub const ALL_ID: &'static str = "all";

    /// Parse a selection id. Unknown ids fall back to `All`.
    pub fn from_id(id: &str) -> Self {
        id.parse::<Category>().map(Self::Only).unwrap_or_default()
    }

    pub fn id(&self) -> &'static str {
        match self {
            CategorySelection::All => Self::ALL_ID,
            CategorySelection::Only(c) => c.id(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategorySelection::All => "All Items",
            CategorySelection::Only(c) => c.name(),
        }
    }

    /// Whether a product in `category` passes this selection.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(c) => *c == category,
        }
    }

    /// The "All" entry followed by every category.
    pub fn options() -> impl Iterator<Item = CategorySelection> {
        std::iter::once(CategorySelection::All).chain(Category::ALL.into_iter().map(Self::Only))
    }
}

impl From<Category> for CategorySelection {
    fn from(c: Category) -> Self {
        Self::Only(c)
    }
}
