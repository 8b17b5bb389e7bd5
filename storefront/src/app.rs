//! Application shell, layout and routing.

use crate::pages::{BrowsePage, CartPage, DashboardPage, HomePage, ListingsPage};
use crate::state::{provide_market, use_market, MarketState};
use crate::toast::{ToastViewport, Toaster};
use ecofinds_commerce::catalog::CategorySelection;
use ecofinds_commerce::session::SessionState;
use ecofinds_core::{browse_href, AppRoute, MarketConfig, NAV};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App(config: MarketConfig, session: SessionState) -> impl IntoView {
    provide_meta_context();

    let title = format!("{} - {}", config.market.name, config.market.tagline);
    let description = format!("{}: buy and sell pre-loved items.", config.market.name);
    let toaster = Toaster::new();
    provide_market(MarketState::new(session, config, toaster));

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content=description/>
        <Title text=title/>

        <Router>
            <Header/>
            <main class="container">
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/browse") view=BrowsePage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                    <Route path=path!("/my-listings") view=ListingsPage/>
                </Routes>
            </main>
            <Footer/>
            <ToastViewport toaster=toaster/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let market = use_market();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    Effect::new(move |_| {
        let path = pathname.get();
        tracing::debug!(path = %path, "Navigated");
        menu_open.set(false);
    });

    let nav_links = move || {
        NAV.iter()
            .map(|route| {
                let route = *route;
                view! {
                    <a
                        href=route.path()
                        class=move || {
                            if pathname.with(|p| route.is_active(p)) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            }
                        }
                    >
                        {route.label()}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="site-header">
            <div class="container header-row">
                <a href=AppRoute::Home.path() class="logo">
                    <span class="logo-mark">"\u{1f343}"</span>
                    <span class="logo-text">{market.market_name()}</span>
                </a>

                <SearchForm class="search-desktop"/>

                <nav class="nav-desktop">{nav_links}</nav>

                <div class="header-actions">
                    <a href=AppRoute::Cart.path() class="icon-link" aria-label="Cart">
                        "\u{1f6d2}"
                        {move || {
                            let count = market.cart_count();
                            (count > 0).then(|| view! { <span class="cart-badge">{count.to_string()}</span> })
                        }}
                    </a>
                    <a href=AppRoute::Dashboard.path() class="icon-link" aria-label="Dashboard">
                        "\u{1f464}"
                    </a>
                    <button
                        class="icon-link menu-toggle"
                        aria-label="Menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "\u{2630}"
                    </button>
                </div>
            </div>

            <SearchForm class="search-mobile container"/>

            <Show when=move || menu_open.get()>
                <nav class="nav-mobile container">{nav_links}</nav>
            </Show>
        </header>
    }
}

/// Header search box. Submitting opens the browse view filtered by the text.
#[component]
fn SearchForm(class: &'static str) -> impl IntoView {
    let navigate = use_navigate();
    let search = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let href = browse_href(CategorySelection::All, &search.get_untracked());
        navigate(&href, Default::default());
    };

    view! {
        <form class=class on:submit=on_submit>
            <input
                type="search"
                placeholder="Search sustainable finds..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
        </form>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let market = use_market();
    let (name, tagline) = market
        .config
        .with_value(|c| (c.market.name.clone(), c.market.tagline.clone()));

    view! {
        <footer class="site-footer">
            <p><strong>{name}</strong> " \u{00b7} " {tagline}</p>
            <p class="muted small">"Sample data only. Everything resets on reload."</p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;
    tracing::warn!(path = %pathname.get_untracked(), "No route matched");

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href=AppRoute::Home.path() class="btn">"Back to Home"</a>
        </div>
    }
}
