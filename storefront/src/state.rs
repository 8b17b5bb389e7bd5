//! Session state shared with every view through context.

use crate::toast::Toaster;
use ecofinds_commerce::session::{Action, SessionState};
use ecofinds_core::MarketConfig;
use leptos::prelude::*;

/// Handle to the marketplace session.
///
/// Views read through `session` and change state only with
/// [`MarketState::dispatch`].
#[derive(Debug, Clone, Copy)]
pub struct MarketState {
    pub session: RwSignal<SessionState>,
    pub config: StoredValue<MarketConfig>,
    pub toaster: Toaster,
}

impl MarketState {
    pub fn new(session: SessionState, config: MarketConfig, toaster: Toaster) -> Self {
        Self {
            session: RwSignal::new(session),
            config: StoredValue::new(config),
            toaster,
        }
    }

    /// Apply `action` and toast whatever it reports.
    pub fn dispatch(&self, action: Action) {
        let toaster = self.toaster;
        self.session.update(|s| s.dispatch(action, &toaster));
    }

    /// Total units in the cart, for the header badge.
    pub fn cart_count(&self) -> u64 {
        self.session.with(|s| s.cart.item_count())
    }

    pub fn market_name(&self) -> String {
        self.config.with_value(|c| c.market.name.clone())
    }
}

/// Put `state` in context for the component tree below.
pub fn provide_market(state: MarketState) {
    provide_context(state);
}

/// The session provided by [`provide_market`].
pub fn use_market() -> MarketState {
    expect_context::<MarketState>()
}
