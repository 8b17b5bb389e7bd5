//! Cart and line item types.

use crate::cart::{compute_totals, CartTotals, ShippingPolicy};
use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product/quantity pair in the cart.
///
/// Product fields are copied in so the cart renders without the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product id; one line per product.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Seller display name.
    pub seller: String,
    /// Product category.
    pub category: Category,
    /// Optional image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl LineItem {
    /// Create a line for `product`.
    ///
    /// Returns an error if quantity is zero.
    pub fn from_product(product: &Product, quantity: u32) -> Result<Self, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        Ok(Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            quantity,
            seller: product.seller.clone(),
            category: product.category,
            image: product.image.clone(),
        })
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    pub fn initial(&self) -> String {
        crate::catalog::title_initial(&self.title)
    }
}

/// The session's shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart pre-seeded with lines.
    ///
    /// Lines with quantity 0 are dropped and repeated product ids are merged.
    pub fn from_lines(lines: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            match cart.lines.iter_mut().find(|l| l.id == line.id) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Add `quantity` of `product`.
    ///
    /// If the product already has a line its quantity grows; otherwise a new
    /// line is appended. Returns an error if quantity is zero.
    pub fn add_product(&mut self, product: &Product, quantity: u32) -> Result<(), CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(0));
        }
        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            return Ok(());
        }
        self.lines.push(LineItem::from_product(product, quantity)?);
        Ok(())
    }

    /// Replace a line's quantity.
    ///
    /// Quantities below 1 are ignored, as are unknown line ids. Returns
    /// whether anything changed.
    pub fn set_quantity(&mut self, line_id: &ProductId, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        match self.lines.iter_mut().find(|l| &l.id == line_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Raise a line's quantity by one.
    pub fn increment(&mut self, line_id: &ProductId) -> bool {
        match self.get(line_id) {
            Some(line) => {
                let next = line.quantity.saturating_add(1);
                self.set_quantity(line_id, next)
            }
            None => false,
        }
    }

    /// Lower a line's quantity by one. A line at 1 stays at 1.
    pub fn decrement(&mut self, line_id: &ProductId) -> bool {
        match self.get(line_id) {
            Some(line) => {
                let next = line.quantity.saturating_sub(1);
                self.set_quantity(line_id, next)
            }
            None => false,
        }
    }

    /// Remove a line, returning it. Unknown ids leave the cart untouched.
    pub fn remove_line(&mut self, line_id: &ProductId) -> Option<LineItem> {
        let index = self.lines.iter().position(|l| &l.id == line_id)?;
        Some(self.lines.remove(index))
    }

    /// Remove every line, returning them in cart order.
    pub fn clear(&mut self) -> Vec<LineItem> {
        std::mem::take(&mut self.lines)
    }

    /// Get a line by product id.
    pub fn get(&self, line_id: &ProductId) -> Option<&LineItem> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Derived totals, recomputed from the current lines on every call.
    pub fn totals(&self, policy: &ShippingPolicy) -> CartTotals {
        compute_totals(&self.lines, policy)
    }
}
