//! Orders recorded at checkout for the dashboard purchase history.

use crate::cart::{CartTotals, LineItem};
use crate::ids::OrderId;
use serde::{Deserialize, Serialize};

/// A simulated, already-paid order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// 1-based sequence number within the session.
    pub number: usize,
    pub lines: Vec<LineItem>,
    pub totals: CartTotals,
}

impl Order {
    pub fn new(number: usize, lines: Vec<LineItem>, totals: CartTotals) -> Self {
        Self {
            id: OrderId::new(format!("order-{}", number)),
            number,
            lines,
            totals,
        }
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// "Order #3".
    pub fn label(&self) -> String {
        format!("Order #{}", self.number)
    }
}
