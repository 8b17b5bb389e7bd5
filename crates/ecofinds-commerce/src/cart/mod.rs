//! Shopping cart module.
//!
//! Contains line items, quantity rules, and derived totals with shipping.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem};
pub use pricing::{compute_totals, CartTotals, ShippingPolicy};
