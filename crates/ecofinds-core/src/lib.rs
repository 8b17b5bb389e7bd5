//! EcoFinds application plumbing.
//!
//! Everything the storefront needs besides views and domain state:
//!
//! - [`MarketConfig`]: TOML configuration with defaults for every key
//! - [`init_logging`]: `tracing` subscriber bootstrap with a pluggable writer
//! - [`AppRoute`]: the logical route table and browse links
//!
//! # Example
//!
//! ```rust
//! use ecofinds_core::prelude::*;
//!
//! let config = MarketConfig::from_toml_str("[shipping]\nflat_fee_cents = 599\n").unwrap();
//! assert_eq!(config.shipping_policy().flat_fee.display(), "$5.99");
//! assert_eq!(AppRoute::from_path("/my-listings"), Some(AppRoute::Listings));
//! ```

pub mod prelude;

mod config;
mod error;
mod logging;
mod routes;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use routes::*;
