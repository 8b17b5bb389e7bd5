//! Listing records and status.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ListingId;
use crate::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Active,
    Sold,
    Draft,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "active",
            ListingStatus::Sold => "sold",
            ListingStatus::Draft => "draft",
        }
    }

    /// Capitalized badge text.
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Active => "Active",
            ListingStatus::Sold => "Sold",
            ListingStatus::Draft => "Draft",
        }
    }

    /// Badge style for this status.
    pub fn style(&self) -> StatusStyle {
        match self {
            ListingStatus::Active => StatusStyle::Success,
            ListingStatus::Sold => StatusStyle::Warning,
            ListingStatus::Draft => StatusStyle::Neutral,
        }
    }
}

impl FromStr for ListingStatus {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ListingStatus::Active),
            "sold" => Ok(ListingStatus::Sold),
            "draft" => Ok(ListingStatus::Draft),
            _ => Err(CommerceError::UnknownListingStatus(s.to_string())),
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display style of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusStyle {
    Success,
    Warning,
    Neutral,
}

impl StatusStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusStyle::Success => "badge badge-success",
            StatusStyle::Warning => "badge badge-warning",
            StatusStyle::Neutral => "badge badge-muted",
        }
    }
}

/// A product the signed-in user is selling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub price: Money,
    pub category: Category,
    #[serde(default)]
    pub status: ListingStatus,
    /// View counter.
    #[serde(default)]
    pub views: u64,
    /// Like counter.
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub description: String,
    pub created_at: NaiveDate,
}

impl Listing {
    /// Create an active listing with zeroed counters.
    pub fn new(
        id: impl Into<ListingId>,
        title: impl Into<String>,
        price: Money,
        category: Category,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            category,
            status: ListingStatus::Active,
            views: 0,
            likes: 0,
            description: String::new(),
            created_at,
        }
    }

    pub fn with_status(mut self, status: ListingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn initial(&self) -> String {
        crate::catalog::title_initial(&self.title)
    }
}
