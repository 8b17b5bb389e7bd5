//! Applies actions to a [`SessionState`].

use super::{Action, SessionState};
use crate::notify::Notification;
use crate::orders::Order;
use crate::profile::EditMode;
use tracing::{debug, info};

/// Apply `action` to `state` and return the notifications it produced.
///
/// Every action is total: unknown ids and out-of-range quantities leave the
/// state unchanged and produce no notification. Produced notifications are
/// also recorded in the session activity feed.
pub fn reduce(state: &mut SessionState, action: Action) -> Vec<Notification> {
    debug!(action = action.name(), "Applying action");

    let notes = match action {
        Action::AddToCart {
            product_id,
            quantity,
        } => match state.catalog.get(&product_id) {
            Some(product) if quantity > 0 => {
                let title = product.title.clone();
                match state.cart.add_product(product, quantity) {
                    Ok(()) => vec![Notification::added_to_cart(&title)],
                    Err(_) => Vec::new(),
                }
            }
            Some(_) => Vec::new(),
            None => {
                debug!(product_id = %product_id, "Ignoring unknown product");
                Vec::new()
            }
        },

        Action::SetQuantity { line_id, quantity } => {
            state.cart.set_quantity(&line_id, quantity);
            Vec::new()
        }

        Action::IncrementQuantity(line_id) => {
            state.cart.increment(&line_id);
            Vec::new()
        }

        Action::DecrementQuantity(line_id) => {
            state.cart.decrement(&line_id);
            Vec::new()
        }

        Action::RemoveLine(line_id) => match state.cart.remove_line(&line_id) {
            Some(line) => vec![Notification::item_removed(&line.title)],
            None => Vec::new(),
        },

        Action::Checkout => {
            let totals = state.cart_totals();
            let lines = state.cart.clear();
            if !lines.is_empty() {
                let number = state.orders.len() + 1;
                let order = Order::new(number, lines, totals);
                info!(
                    order = %order.id,
                    items = order.item_count(),
                    total = %order.totals.total,
                    "Checkout completed"
                );
                state.orders.push(order);
            }
            vec![Notification::checkout_succeeded()]
        }

        Action::DeleteListing(id) => match state.listings.delete(&id) {
            Some(listing) => {
                info!(listing = %listing.id, remaining = state.listings.len(), "Listing deleted");
                vec![Notification::listing_deleted(&listing.title)]
            }
            None => Vec::new(),
        },

        Action::ToggleFavorite(product_id) => match state.catalog.get(&product_id) {
            Some(product) => {
                let title = product.title.clone();
                if let Some(pos) = state.favorites.iter().position(|id| *id == product_id) {
                    state.favorites.remove(pos);
                    vec![Notification::favorite_removed(&title)]
                } else {
                    state.favorites.push(product_id);
                    vec![Notification::favorite_added(&title)]
                }
            }
            None => Vec::new(),
        },

        Action::ToggleProfileEdit => match state.profile.toggle() {
            EditMode::ReadOnly => vec![Notification::profile_saved()],
            EditMode::Editing => Vec::new(),
        },

        Action::SetProfileField { field, value } => {
            state.profile.set_field(field, value);
            Vec::new()
        }

        Action::SaveProfile => {
            if state.profile.save() {
                vec![Notification::profile_saved()]
            } else {
                Vec::new()
            }
        }
    };

    for note in &notes {
        state.record_activity(note);
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ShippingPolicy;
    use crate::ids::{ListingId, ProductId};
    use crate::money::Money;
    use crate::notify::NotificationKind;
    use crate::profile::ProfileField;
    use crate::session::ACTIVITY_LIMIT;

    fn session() -> SessionState {
        SessionState::seeded(ShippingPolicy::default()).unwrap()
    }

    #[test]
    fn test_add_to_cart_merges_existing_line() {
        let mut state = session();
        let notes = reduce(
            &mut state,
            Action::AddToCart {
                product_id: ProductId::new("1"),
                quantity: 1,
            },
        );
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Added to Cart");
        assert_eq!(state.cart.line_count(), 3);
        assert_eq!(state.cart.get(&ProductId::new("1")).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_to_cart_new_line_appends() {
        let mut state = session();
        reduce(
            &mut state,
            Action::AddToCart {
                product_id: ProductId::new("8"),
                quantity: 1,
            },
        );
        let last = state.cart.lines().last().unwrap();
        assert_eq!(last.id, ProductId::new("8"));
        assert_eq!(last.price, Money::usd(3500));
    }

    #[test]
    fn test_add_to_cart_ignores_unknown_and_zero() {
        let mut state = session();
        let before = state.cart.clone();
        let unknown = reduce(
            &mut state,
            Action::AddToCart {
                product_id: ProductId::new("missing"),
                quantity: 1,
            },
        );
        let zero = reduce(
            &mut state,
            Action::AddToCart {
                product_id: ProductId::new("2"),
                quantity: 0,
            },
        );
        assert!(unknown.is_empty() && zero.is_empty());
        assert_eq!(state.cart, before);
        assert!(state.activity.is_empty());
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut state = session();
        let id = ProductId::new("1");
        reduce(&mut state, Action::DecrementQuantity(id.clone()));
        reduce(&mut state, Action::DecrementQuantity(id.clone()));
        assert_eq!(state.cart.get(&id).unwrap().quantity, 1);
    }

    #[test]
    fn test_set_quantity_below_one_is_ignored() {
        let mut state = session();
        let id = ProductId::new("3");
        reduce(
            &mut state,
            Action::SetQuantity {
                line_id: id.clone(),
                quantity: 0,
            },
        );
        assert_eq!(state.cart.get(&id).unwrap().quantity, 2);
        reduce(
            &mut state,
            Action::SetQuantity {
                line_id: id.clone(),
                quantity: 5,
            },
        );
        assert_eq!(state.cart.get(&id).unwrap().quantity, 5);
    }

    #[test]
    fn test_remove_line_notifies_with_title() {
        let mut state = session();
        let notes = reduce(&mut state, Action::RemoveLine(ProductId::new("5")));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Item Removed");
        assert!(notes[0].description.contains("Wireless Gaming Headset"));
        assert_eq!(state.cart.line_count(), 2);

        let again = reduce(&mut state, Action::RemoveLine(ProductId::new("5")));
        assert!(again.is_empty());
        assert_eq!(state.cart.line_count(), 2);
    }

    #[test]
    fn test_checkout_records_order_and_clears_cart() {
        let mut state = session();
        let expected = state.cart_totals();
        let notes = reduce(&mut state, Action::Checkout);

        assert_eq!(notes[0].kind, NotificationKind::Success);
        assert!(state.cart.is_empty());
        assert_eq!(state.orders.len(), 1);
        assert_eq!(state.orders[0].totals, expected);
        assert_eq!(state.orders[0].label(), "Order #1");
    }

    #[test]
    fn test_order_number_follows_history_length() {
        let mut state = session();
        let template = state.cart.clone();
        for _ in 0..3 {
            state.cart = template.clone();
            reduce(&mut state, Action::Checkout);
        }

        let numbers: Vec<usize> = state.orders.iter().map(|o| o.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(state.orders[2].id.as_str(), "order-3");
    }

    #[test]
    fn test_checkout_empty_cart_records_no_order() {
        let mut state = session();
        reduce(&mut state, Action::Checkout);
        let notes = reduce(&mut state, Action::Checkout);
        assert_eq!(notes.len(), 1);
        assert!(state.cart.is_empty());
        assert_eq!(state.orders.len(), 1);
    }

    #[test]
    fn test_delete_listing() {
        let mut state = session();
        let notes = reduce(&mut state, Action::DeleteListing(ListingId::new("2")));
        assert_eq!(notes[0].title, "Listing Deleted");
        let stats = state.listing_stats();
        assert_eq!((stats.total, stats.active, stats.sold), (2, 2, 0));

        assert!(reduce(&mut state, Action::DeleteListing(ListingId::new("2"))).is_empty());
    }

    #[test]
    fn test_toggle_favorite() {
        let mut state = session();
        let id = ProductId::new("4");
        let added = reduce(&mut state, Action::ToggleFavorite(id.clone()));
        assert_eq!(added[0].title, "Saved to Favorites");
        assert!(state.is_favorite(&id));

        let removed = reduce(&mut state, Action::ToggleFavorite(id.clone()));
        assert_eq!(removed[0].title, "Removed from Favorites");
        assert!(!state.is_favorite(&id));

        assert!(reduce(&mut state, Action::ToggleFavorite(ProductId::new("nope"))).is_empty());
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_favorite_products_in_catalog_order() {
        let mut state = session();
        reduce(&mut state, Action::ToggleFavorite(ProductId::new("7")));
        reduce(&mut state, Action::ToggleFavorite(ProductId::new("2")));
        let ids: Vec<_> = state
            .favorite_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "7"]);
    }

    #[test]
    fn test_profile_edit_flow() {
        let mut state = session();
        let ignored = reduce(
            &mut state,
            Action::SetProfileField {
                field: ProfileField::Location,
                value: "Portland, OR".into(),
            },
        );
        assert!(ignored.is_empty());
        assert_eq!(state.profile.profile().location, "San Francisco, CA");

        reduce(&mut state, Action::ToggleProfileEdit);
        assert!(state.profile.is_editing());
        reduce(
            &mut state,
            Action::SetProfileField {
                field: ProfileField::Location,
                value: "Portland, OR".into(),
            },
        );
        let saved = reduce(&mut state, Action::ToggleProfileEdit);
        assert_eq!(saved[0].title, "Profile Saved");
        assert!(!state.profile.is_editing());
        assert_eq!(state.profile.profile().location, "Portland, OR");

        assert!(reduce(&mut state, Action::SaveProfile).is_empty());
    }

    #[test]
    fn test_activity_newest_first_and_bounded() {
        let mut state = session();
        let id = ProductId::new("6");
        for _ in 0..(ACTIVITY_LIMIT + 5) {
            reduce(&mut state, Action::ToggleFavorite(id.clone()));
        }
        assert_eq!(state.activity.len(), ACTIVITY_LIMIT);
        // 25 toggles end on an add.
        assert_eq!(state.activity[0].title, "Saved to Favorites");
        assert_eq!(state.activity[1].title, "Removed from Favorites");
    }
}
