//! User-visible notifications.
//!
//! Store operations report what happened as [`Notification`] values; the
//! storefront shows them as toasts through a [`Notifier`].

use serde::{Deserialize, Serialize};

/// Tone of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
}

/// A title + description pair shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn item_removed(title: &str) -> Self {
        Self::new(
            NotificationKind::Info,
            "Item Removed",
            format!("\"{}\" has been removed from your cart.", title),
        )
    }

    pub fn added_to_cart(title: &str) -> Self {
        Self::new(
            NotificationKind::Success,
            "Added to Cart",
            format!("\"{}\" has been added to your cart.", title),
        )
    }

    pub fn checkout_succeeded() -> Self {
        Self::new(
            NotificationKind::Success,
            "Checkout Successful!",
            "Your order has been placed successfully.",
        )
    }

    pub fn listing_deleted(title: &str) -> Self {
        Self::new(
            NotificationKind::Info,
            "Listing Deleted",
            format!("\"{}\" has been removed from your listings.", title),
        )
    }

    pub fn favorite_added(title: &str) -> Self {
        Self::new(
            NotificationKind::Success,
            "Saved to Favorites",
            format!("\"{}\" has been added to your favorites.", title),
        )
    }

    pub fn favorite_removed(title: &str) -> Self {
        Self::new(
            NotificationKind::Info,
            "Removed from Favorites",
            format!("\"{}\" has been removed from your favorites.", title),
        )
    }

    pub fn profile_saved() -> Self {
        Self::new(
            NotificationKind::Success,
            "Profile Saved",
            "Your profile information has been updated.",
        )
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Collects notifications in memory.
impl Notifier for std::cell::RefCell<Vec<Notification>> {
    fn notify(&self, notification: Notification) {
        self.borrow_mut().push(notification);
    }
}

/// Discards notifications.
impl Notifier for () {
    fn notify(&self, _notification: Notification) {}
}
