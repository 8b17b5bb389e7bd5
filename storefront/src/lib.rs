//! EcoFinds storefront
//!
//! Client-side rendered Leptos app over the in-memory marketplace session:
//! - Home, browse, cart, dashboard and listings views
//! - URL-driven category and text filtering on the browse view
//! - Toast notifications for every session change worth reporting
//! - `tracing` output to the browser console

mod app;
mod components;
mod console;
mod pages;
mod state;
mod toast;

pub use app::App;
pub use console::ConsoleMakeWriter;
pub use state::{provide_market, use_market, MarketState};
pub use toast::{Toaster, TOAST_DURATION};

use ecofinds_commerce::session::SessionState;
use ecofinds_core::{init_logging, MarketConfig};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// Configuration baked in at build time.
const CONFIG_TOML: &str = include_str!("../ecofinds.toml");

/// Load configuration, install logging and mount the app on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match MarketConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => (config, None),
        Err(e) => (MarketConfig::default(), Some(e)),
    };

    if let Err(e) = init_logging(&config.logging, ConsoleMakeWriter) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logging disabled: {}", e)));
    }
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Invalid ecofinds.toml, using defaults");
    }

    match SessionState::seeded(config.shipping_policy()) {
        Ok(session) => {
            tracing::info!(
                market = %config.market.name,
                products = session.catalog.len(),
                cart_lines = session.cart.line_count(),
                listings = session.listings.len(),
                "Starting storefront"
            );
            leptos::mount::mount_to_body(move || {
                view! { <App config=config.clone() session=session.clone()/> }
            });
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load marketplace data");
            let message = e.to_string();
            leptos::mount::mount_to_body(move || {
                view! {
                    <div class="load-error">
                        <h1>"Something went wrong"</h1>
                        <p>{message.clone()}</p>
                    </div>
                }
            });
        }
    }
}
