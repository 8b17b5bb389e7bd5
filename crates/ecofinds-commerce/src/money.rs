//! Money type for representing monetary values.
//!
//! Amounts are whole cents. Prices like $45.99 are exact, so the free
//! shipping threshold comparison never suffers float rounding.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "CAD" => Some(Currency::CAD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Shorthand for a US dollar amount in cents.
    pub const fn usd(amount_cents: i64) -> Self {
        Self::new(amount_cents, Currency::USD)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// The same amount tagged with `currency`.
    pub const fn in_currency(self, currency: Currency) -> Self {
        Self::new(self.amount_cents, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Add another amount, failing on currency mismatch or overflow.
    pub fn checked_add(&self, other: &Money) -> Result<Money, CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Multiply by a quantity, failing on overflow.
    pub fn checked_mul(&self, quantity: u32) -> Result<Money, CommerceError> {
        self.amount_cents
            .checked_mul(i64::from(quantity))
            .map(|cents| Money::new(cents, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Add another amount in the same currency, clamping at the numeric bounds.
    ///
    /// The other amount's currency is ignored; callers only sum values drawn
    /// from one cart.
    pub fn saturating_add(&self, other: &Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents), self.currency)
    }

    /// Multiply by a quantity, clamping at the numeric bounds.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::new(
            self.amount_cents.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(&other)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        self.saturating_mul(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(mut iter: I) -> Money {
        match iter.next() {
            Some(first) => iter.fold(first, |acc, m| acc + m),
            None => Money::default(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::usd(4599).display(), "$45.99");
        assert_eq!(Money::usd(499).display(), "$4.99");
        assert_eq!(Money::usd(0).display(), "$0.00");
        assert_eq!(Money::usd(45000).display(), "$450.00");
        assert_eq!(Money::new(1550, Currency::GBP).display(), "\u{00a3}15.50");
    }

    #[test]
    fn test_negative_display() {
        assert_eq!(Money::usd(-105).display_amount(), "-1.05");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::usd(1000) + Money::usd(500);
        assert_eq!(c.amount_cents, 1500);
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!((Money::usd(2550) * 2).amount_cents, 5100);
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let usd = Money::usd(1000);
        let eur = Money::new(1000, Currency::EUR);
        assert!(matches!(
            usd.checked_add(&eur),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_checked_mul_overflow() {
        let huge = Money::usd(i64::MAX / 2);
        assert!(matches!(huge.checked_mul(3), Err(CommerceError::Overflow)));
        assert_eq!(huge.saturating_mul(3).amount_cents, i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = vec![Money::usd(4599), Money::usd(5100)].into_iter().sum();
        assert_eq!(total, Money::usd(9699));

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }

    #[test]
    fn test_same_cents_differ_by_currency() {
        use std::collections::HashSet;

        let usd = Money::usd(1599);
        let gbp = usd.in_currency(Currency::GBP);
        assert_eq!(gbp.amount_cents, 1599);
        assert_ne!(usd, gbp);

        let set: HashSet<Money> = [usd, gbp, Money::usd(1599)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_currency_defaults_when_missing() {
        let m: Money = serde_json::from_str(r#"{"amount_cents": 1599}"#).unwrap();
        assert_eq!(m, Money::usd(1599));
    }
}
