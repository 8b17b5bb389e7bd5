//! Session state container.
//!
//! All marketplace state for one browser session lives in a single
//! [`SessionState`] that views receive by context. Views never mutate it
//! directly: they send an [`Action`] through [`reduce`], which applies it and
//! returns the notifications to show.

mod action;
mod reducer;

pub use action::Action;
pub use reducer::reduce;

use crate::cart::{Cart, CartTotals, ShippingPolicy};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::listings::{ListingStats, Listings};
use crate::notify::{Notification, Notifier};
use crate::orders::Order;
use crate::profile::{ProfileEditor, UserProfile};
use crate::seed;

/// Maximum entries kept in the activity feed.
pub const ACTIVITY_LIMIT: usize = 20;

/// Everything the views render.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub catalog: Catalog,
    pub cart: Cart,
    pub listings: Listings,
    pub profile: ProfileEditor,
    /// Favorited product ids, in the order they were added.
    pub favorites: Vec<ProductId>,
    /// Purchase history, oldest first.
    pub orders: Vec<Order>,
    /// Recent notifications, newest first.
    pub activity: Vec<Notification>,
    pub shipping: ShippingPolicy,
}

impl SessionState {
    /// Build a session from explicit parts.
    pub fn new(
        catalog: Catalog,
        cart: Cart,
        listings: Listings,
        profile: UserProfile,
        shipping: ShippingPolicy,
    ) -> Self {
        Self {
            catalog,
            cart,
            listings,
            profile: ProfileEditor::new(profile),
            favorites: Vec::new(),
            orders: Vec::new(),
            activity: Vec::new(),
            shipping,
        }
    }

    /// Build a session from the embedded sample data.
    ///
    /// Fixture prices are tagged with the shipping policy's currency so every
    /// amount the session shows is in one currency.
    pub fn seeded(shipping: ShippingPolicy) -> Result<Self, CommerceError> {
        let currency = shipping.currency();
        let catalog = Catalog::new(
            seed::catalog()?
                .iter()
                .cloned()
                .map(|mut p| {
                    p.price = p.price.in_currency(currency);
                    p
                })
                .collect(),
        );
        let cart = Cart::from_lines(seed::cart()?.lines().iter().cloned().map(|mut line| {
            line.price = line.price.in_currency(currency);
            line
        }));
        let listings = Listings::new(
            seed::listings()?
                .iter()
                .cloned()
                .map(|mut l| {
                    l.price = l.price.in_currency(currency);
                    l
                })
                .collect(),
        );
        Ok(Self::new(catalog, cart, listings, seed::profile()?, shipping))
    }

    /// Apply `action` and forward its notifications to `notifier`.
    pub fn dispatch(&mut self, action: Action, notifier: &dyn Notifier) {
        for notification in reduce(self, action) {
            notifier.notify(notification);
        }
    }

    /// Cart totals under this session's shipping policy.
    pub fn cart_totals(&self) -> CartTotals {
        self.cart.totals(&self.shipping)
    }

    /// Listing counts by status.
    pub fn listing_stats(&self) -> ListingStats {
        self.listings.stats()
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    /// Favorited products, in catalog order.
    pub fn favorite_products(&self) -> Vec<&Product> {
        self.catalog
            .iter()
            .filter(|p| self.is_favorite(&p.id))
            .collect()
    }

    pub(crate) fn record_activity(&mut self, notification: &Notification) {
        self.activity.insert(0, notification.clone());
        self.activity.truncate(ACTIVITY_LIMIT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;
    use std::cell::RefCell;

    #[test]
    fn test_seeded_prices_follow_policy_currency() {
        use crate::money::{Currency, Money};

        let policy = ShippingPolicy::new(
            Money::new(5000, Currency::GBP),
            Money::new(499, Currency::GBP),
        );
        let mut state = SessionState::seeded(policy).unwrap();

        assert!(state.catalog.iter().all(|p| p.price.currency == Currency::GBP));
        assert!(state.listings.iter().all(|l| l.price.currency == Currency::GBP));

        state.cart = Cart::from_lines(state.cart.lines().iter().take(1).cloned());
        let totals = state.cart_totals();
        assert_eq!(totals.subtotal.currency, Currency::GBP);
        assert_eq!(totals.shipping, policy.flat_fee);
        assert_eq!(totals.total.currency, Currency::GBP);
        assert!(totals.subtotal.display().starts_with('\u{00a3}'));
    }

    #[test]
    fn test_seeded_totals() {
        let state = SessionState::seeded(ShippingPolicy::default()).unwrap();
        let totals = state.cart_totals();
        // 45.99 + 2 * 25.50 + 85.00
        assert_eq!(totals.subtotal.amount_cents, 18199);
        assert!(totals.is_free_shipping());
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn test_dispatch_forwards_notifications() {
        let mut state = SessionState::seeded(ShippingPolicy::default()).unwrap();
        let recorder = RefCell::new(Vec::new());
        state.dispatch(Action::Checkout, &recorder);
        state.dispatch(Action::IncrementQuantity(ProductId::new("1")), &recorder);

        let seen = recorder.into_inner();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, NotificationKind::Success);
        assert_eq!(state.activity, seen);
    }
}
