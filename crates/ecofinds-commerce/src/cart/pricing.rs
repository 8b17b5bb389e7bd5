//! Cart totals and the shipping rule.

use crate::cart::LineItem;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat-fee shipping that becomes free above a subtotal threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotals strictly greater than this ship free.
    pub free_over: Money,
    /// Fee charged otherwise.
    pub flat_fee: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_over: Money::usd(5000),
            flat_fee: Money::usd(499),
        }
    }
}

impl ShippingPolicy {
    pub fn new(free_over: Money, flat_fee: Money) -> Self {
        Self {
            free_over,
            flat_fee,
        }
    }

    /// Shipping charged for `subtotal`.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.amount_cents > self.free_over.amount_cents {
            Money::zero(subtotal.currency)
        } else {
            Money::new(self.flat_fee.amount_cents, subtotal.currency)
        }
    }

    /// "Free shipping on orders over $50.00".
    pub fn notice(&self) -> String {
        format!("Free shipping on orders over {}", self.free_over)
    }

    pub fn currency(&self) -> Currency {
        self.free_over.currency
    }
}

/// Derived cart totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of price times quantity.
    pub subtotal: Money,
    /// Zero above the free shipping threshold, the flat fee otherwise.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}

impl CartTotals {
    pub fn is_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Compute subtotal, shipping and total for `lines`.
///
/// Pure: the same lines and policy always give the same totals.
pub fn compute_totals(lines: &[LineItem], policy: &ShippingPolicy) -> CartTotals {
    let currency = lines
        .first()
        .map(|l| l.price.currency)
        .unwrap_or_else(|| policy.currency());
    let subtotal = lines
        .iter()
        .fold(Money::zero(currency), |acc, line| acc + line.line_total());
    let shipping = policy.shipping_for(subtotal);
    CartTotals {
        subtotal,
        shipping,
        total: subtotal + shipping,
    }
}
