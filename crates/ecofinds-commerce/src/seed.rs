//! Embedded sample data.
//!
//! The marketplace has no backend; every session starts from these JSON
//! fixtures and resets on reload.

use crate::cart::{Cart, LineItem};
use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::listings::{Listing, Listings};
use crate::profile::UserProfile;
use serde::de::DeserializeOwned;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");
const CART_JSON: &str = include_str!("../data/cart.json");
const LISTINGS_JSON: &str = include_str!("../data/listings.json");
const PROFILE_JSON: &str = include_str!("../data/profile.json");

fn parse<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<T, CommerceError> {
    serde_json::from_str(json).map_err(|source| CommerceError::Fixture { name, source })
}

/// The eight sample products, in browse order.
pub fn catalog() -> Result<Catalog, CommerceError> {
    parse::<Vec<Product>>("catalog", CATALOG_JSON).map(Catalog::new)
}

/// The pre-seeded cart.
pub fn cart() -> Result<Cart, CommerceError> {
    parse::<Vec<LineItem>>("cart", CART_JSON).map(Cart::from_lines)
}

/// The signed-in seller's listings.
pub fn listings() -> Result<Listings, CommerceError> {
    parse::<Vec<Listing>>("listings", LISTINGS_JSON).map(Listings::new)
}

/// The signed-in user's profile.
pub fn profile() -> Result<UserProfile, CommerceError> {
    parse("profile", PROFILE_JSON)
}
