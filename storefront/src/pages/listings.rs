use crate::components::{EmptyState, StatCard};
use crate::state::use_market;
use ecofinds_commerce::prelude::*;
use ecofinds_commerce::session::Action;
use ecofinds_core::AppRoute;
use leptos::prelude::*;

/// The seller's own listings with status counts.
#[component]
pub fn ListingsPage() -> impl IntoView {
    let market = use_market();
    let stats = Memo::new(move |_| market.session.with(|s| s.listing_stats()));

    view! {
        <div class="page-heading">
            <h1>"My Listings"</h1>
            <p class="lead">"Manage your products and track their performance"</p>
        </div>

        <div class="stats">
            <StatCard value=Signal::derive(move || stats.get().total) label="Total Listings" tone="primary"/>
            <StatCard value=Signal::derive(move || stats.get().active) label="Active Listings" tone="success"/>
            <StatCard value=Signal::derive(move || stats.get().sold) label="Sold Items" tone="warning"/>
        </div>

        {move || {
            let listings = market.session.with(|s| s.listings.as_slice().to_vec());
            if listings.is_empty() {
                view! {
                    <EmptyState
                        title="No listings yet"
                        message="Start selling your items to build a sustainable marketplace"
                        cta="Browse the Marketplace"
                        route=AppRoute::Browse
                    />
                }
                    .into_any()
            } else {
                view! {
                    <div class="products">
                        {listings
                            .into_iter()
                            .map(|listing| view! { <ListingCard listing=listing/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn ListingCard(listing: Listing) -> impl IntoView {
    let market = use_market();
    let id = listing.id.clone();
    let badge = listing.status.style().css_class();

    view! {
        <div class="card listing-card">
            <div class="product-art">
                <span class="placeholder-initial">{listing.initial()}</span>
                <span class=badge>{listing.status.label()}</span>
            </div>
            <div class="product-info">
                <h3 class="line-clamp-1">{listing.title}</h3>
                <p class="muted line-clamp-2">{listing.description}</p>
                <div class="product-footer">
                    <div>
                        <p class="price">{listing.price.display()}</p>
                        <p class="muted small">{listing.category.name()}</p>
                    </div>
                    <div class="right">
                        <p class="small">{format!("{} views", listing.views)}</p>
                        <p class="muted small">{format!("{} likes", listing.likes)}</p>
                    </div>
                </div>
                <p class="muted small">{format!("Listed {}", listing.created_at.format("%b %-d, %Y"))}</p>
                <button
                    class="btn btn-outline btn-sm danger"
                    on:click=move |_| market.dispatch(Action::DeleteListing(id.clone()))
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
