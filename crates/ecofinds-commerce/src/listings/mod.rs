//! Seller listings module.
//!
//! A seller's own listings, their lifecycle status and aggregate counts.

mod listing;
mod stats;

pub use listing::{Listing, ListingStatus, StatusStyle};
pub use stats::ListingStats;

use crate::ids::ListingId;
use serde::{Deserialize, Serialize};

/// The signed-in seller's listings, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Listings {
    items: Vec<Listing>,
}

impl Listings {
    pub fn new(items: Vec<Listing>) -> Self {
        Self { items }
    }

    /// Delete a listing, returning it. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &ListingId) -> Option<Listing> {
        let index = self.items.iter().position(|l| &l.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.items.iter().find(|l| &l.id == id)
    }

    /// Counts by status over the current listings.
    pub fn stats(&self) -> ListingStats {
        ListingStats::from_listings(&self.items)
    }

    pub fn as_slice(&self) -> &[Listing] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::Money;
    use chrono::NaiveDate;

    fn listing(id: &str, status: ListingStatus) -> Listing {
        Listing::new(
            id,
            format!("Listing {}", id),
            Money::usd(1000),
            Category::Books,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
        .with_status(status)
    }

    fn listings() -> Listings {
        Listings::new(vec![
            listing("1", ListingStatus::Active),
            listing("2", ListingStatus::Sold),
            listing("3", ListingStatus::Active),
        ])
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut listings = listings();
        let removed = listings.delete(&ListingId::new("2")).unwrap();
        assert_eq!(removed.title, "Listing 2");
        assert_eq!(listings.len(), 2);
        assert!(listings.get(&ListingId::new("2")).is_none());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut listings = listings();
        assert!(listings.delete(&ListingId::new("9")).is_none());
        assert_eq!(listings.len(), 3);
    }

    #[test]
    fn test_stats_follow_deletes() {
        let mut listings = listings();
        let stats = listings.stats();
        assert_eq!((stats.total, stats.active, stats.sold), (3, 2, 1));

        listings.delete(&ListingId::new("1"));
        let stats = listings.stats();
        assert_eq!((stats.total, stats.active, stats.sold), (2, 1, 1));
    }
}
