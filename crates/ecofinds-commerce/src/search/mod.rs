//! Search module.
//!
//! Category + free-text filtering over the in-memory catalog.

mod filter;
mod query;
mod results;

pub use filter::Filter;
pub use query::{filter_products, SearchQuery};
pub use results::SearchResults;
