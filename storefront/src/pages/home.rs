use crate::components::ProductGrid;
use crate::state::use_market;
use ecofinds_core::AppRoute;
use leptos::prelude::*;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "\u{267b}",
        "Sustainable Living",
        "Extend product lifecycles and reduce waste by giving items a second chance.",
    ),
    (
        "\u{2665}",
        "Community Driven",
        "Connect with like-minded people who care about the environment and conscious consumption.",
    ),
    (
        "\u{1f6e1}",
        "Trusted Marketplace",
        "Safe and secure transactions with verified users and quality guarantees.",
    ),
    (
        "\u{1f465}",
        "Local First",
        "Prioritize local sellers to reduce shipping impact and support your community.",
    ),
];

/// Landing page with hero, feature tiles and featured products.
#[component]
pub fn HomePage() -> impl IntoView {
    let market = use_market();
    let name = market.market_name();
    let featured_count = market.config.with_value(|c| c.home.featured_count);
    // The catalog never changes during a session.
    let featured = market
        .session
        .with_untracked(|s| s.catalog.featured(featured_count).to_vec());

    view! {
        <section class="hero">
            <h1>"Discover " <span class="accent">"Sustainable"</span> <br/> "Second-Hand Treasures"</h1>
            <p class="lead">
                "Join the circular economy movement. Buy and sell pre-loved items while making a positive impact on our planet."
            </p>
            <div class="hero-actions">
                <a href=AppRoute::Browse.path() class="btn btn-lg">"Start Shopping"</a>
                <a href=AppRoute::Listings.path() class="btn btn-outline btn-lg">"Sell Your Items"</a>
            </div>
        </section>

        <section class="section">
            <div class="section-heading">
                <h2>"Why Choose " {name.clone()} "?"</h2>
                <p class="lead">"More than just a marketplace - we're building a sustainable future together"</p>
            </div>
            <div class="features">
                {FEATURES
                    .iter()
                    .map(|(icon, title, description)| {
                        view! {
                            <div class="card feature-card">
                                <div class="feature-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p class="muted">{*description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="section section-muted">
            <div class="section-heading">
                <h2>"Featured Finds"</h2>
                <p class="lead">"Discover amazing pre-loved items from our community"</p>
            </div>
            <ProductGrid products=featured/>
            <div class="center">
                <a href=AppRoute::Browse.path() class="btn btn-outline btn-lg">"View All Products"</a>
            </div>
        </section>

        <section class="section cta">
            <h2>"Ready to Make a Difference?"</h2>
            <p class="lead">
                "Start your sustainable shopping journey today. Every purchase and sale helps create a more circular economy."
            </p>
            <a href=AppRoute::Dashboard.path() class="btn btn-secondary btn-lg">"Join " {name}</a>
        </section>
    }
}
