//! Marketplace domain types and state for EcoFinds.
//!
//! This crate holds everything the storefront renders, with no UI dependency:
//!
//! - **Catalog**: Products and the fixed category set
//! - **Search**: Category + free-text filtering over the catalog
//! - **Cart**: Line items, quantities, derived totals and shipping
//! - **Listings**: A seller's own listings and their status counts
//! - **Profile**: The editable user profile
//! - **Session**: The explicit state container and its action reducer
//!
//! # Example
//!
//! ```rust
//! use ecofinds_commerce::prelude::*;
//!
//! let mut session = SessionState::seeded(ShippingPolicy::default()).unwrap();
//! let notes = reduce(&mut session, Action::IncrementQuantity(ProductId::new("1")));
//! assert!(notes.is_empty());
//!
//! let totals = session.cart_totals();
//! println!("Total: {}", totals.total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod listings;
pub mod notify;
pub mod orders;
pub mod profile;
pub mod search;
pub mod seed;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategorySelection, Product};

    // Search
    pub use crate::search::{filter_products, Filter, SearchQuery, SearchResults};

    // Cart
    pub use crate::cart::{compute_totals, Cart, CartTotals, LineItem, ShippingPolicy};

    // Listings
    pub use crate::listings::{Listing, ListingStats, ListingStatus, Listings, StatusStyle};

    // Profile
    pub use crate::profile::{EditMode, ProfileEditor, ProfileField, UserProfile};

    // Session
    pub use crate::notify::{Notification, NotificationKind, Notifier};
    pub use crate::orders::Order;
    pub use crate::session::{reduce, Action, SessionState};
}
