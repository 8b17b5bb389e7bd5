//! User intents forwarded from views.

use crate::ids::{ListingId, ProductId};
use crate::profile::ProfileField;

/// One discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add a catalog product to the cart.
    AddToCart { product_id: ProductId, quantity: u32 },
    /// Replace a line's quantity. Values below 1 are ignored.
    SetQuantity { line_id: ProductId, quantity: u32 },
    IncrementQuantity(ProductId),
    /// Floors at 1.
    DecrementQuantity(ProductId),
    RemoveLine(ProductId),
    /// Place the order and empty the cart.
    Checkout,
    DeleteListing(ListingId),
    ToggleFavorite(ProductId),
    /// The profile card's Edit/Save button.
    ToggleProfileEdit,
    SetProfileField { field: ProfileField, value: String },
    SaveProfile,
}

impl Action {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddToCart { .. } => "add_to_cart",
            Action::SetQuantity { .. } => "set_quantity",
            Action::IncrementQuantity(_) => "increment_quantity",
            Action::DecrementQuantity(_) => "decrement_quantity",
            Action::RemoveLine(_) => "remove_line",
            Action::Checkout => "checkout",
            Action::DeleteListing(_) => "delete_listing",
            Action::ToggleFavorite(_) => "toggle_favorite",
            Action::ToggleProfileEdit => "toggle_profile_edit",
            Action::SetProfileField { .. } => "set_profile_field",
            Action::SaveProfile => "save_profile",
        }
    }
}
