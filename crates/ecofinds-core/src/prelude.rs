//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use ecofinds_core::prelude::*;
//! ```

pub use crate::{
    browse_href, init_logging, AppRoute, CoreError, HomeSection, LogFormat, LoggingConfig,
    MarketConfig, MarketSection, ShippingSection, NAV,
};
