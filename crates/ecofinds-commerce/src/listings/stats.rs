//! Aggregate listing counts.

use crate::listings::{Listing, ListingStatus};

/// Listing counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingStats {
    pub total: usize,
    pub active: usize,
    pub sold: usize,
    pub draft: usize,
}

impl ListingStats {
    /// Count `listings` by status.
    pub fn from_listings(listings: &[Listing]) -> Self {
        listings.iter().fold(
            Self {
                total: listings.len(),
                ..Self::default()
            },
            |mut stats, listing| {
                match listing.status {
                    ListingStatus::Active => stats.active += 1,
                    ListingStatus::Sold => stats.sold += 1,
                    ListingStatus::Draft => stats.draft += 1,
                }
                stats
            },
        )
    }

    /// Listings that are neither active nor sold.
    pub fn other(&self) -> usize {
        self.total - self.active - self.sold
    }
}
