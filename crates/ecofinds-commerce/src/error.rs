//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while building marketplace state.
///
/// Store operations triggered from the UI are total and never fail; these
/// errors come from parsing ids, fixtures and checked money arithmetic.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Category id not in the fixed category set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Listing status not one of active, sold, draft.
    #[error("Unknown listing status: {0}")]
    UnknownListingStatus(String),

    /// Unknown profile field name.
    #[error("Unknown profile field: {0}")]
    UnknownProfileField(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Embedded sample data could not be parsed.
    #[error("Fixture error in {name}: {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
