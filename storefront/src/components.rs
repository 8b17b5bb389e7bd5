//! Reusable view components.

use crate::state::use_market;
use ecofinds_commerce::prelude::*;
use ecofinds_commerce::session::Action;
use ecofinds_core::{browse_href, AppRoute};
use leptos::prelude::*;

// ============================================================================
// Product Card
// ============================================================================

/// Catalog product tile with favorite toggle and add-to-cart.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let market = use_market();
    let id = product.id.clone();
    let fav_id = product.id.clone();
    let is_favorite = Memo::new(move |_| market.session.with(|s| s.is_favorite(&fav_id)));

    let toggle_id = product.id.clone();
    let on_favorite = move |_| market.dispatch(Action::ToggleFavorite(toggle_id.clone()));
    let on_add = move |_| {
        market.dispatch(Action::AddToCart {
            product_id: id.clone(),
            quantity: 1,
        })
    };

    let art = match product.image.clone() {
        Some(src) => view! { <img src=src alt=product.title.clone()/> }.into_any(),
        None => view! { <span class="placeholder-initial">{product.initial()}</span> }.into_any(),
    };

    view! {
        <div class="card product-card">
            <div class="product-art">
                {art}
                <span class="badge badge-category">{product.category.name()}</span>
                <button
                    class=move || if is_favorite.get() { "fav-button active" } else { "fav-button" }
                    aria-label="Toggle favorite"
                    on:click=on_favorite
                >
                    {move || if is_favorite.get() { "\u{2665}" } else { "\u{2661}" }}
                </button>
            </div>
            <div class="product-info">
                <h3 class="line-clamp-1">{product.title}</h3>
                <p class="muted line-clamp-2">{product.description}</p>
                <div class="product-footer">
                    <div>
                        <p class="price">{product.price.display()}</p>
                        <p class="muted small">"by " {product.seller}</p>
                    </div>
                    <button class="btn btn-sm" on:click=on_add>"Add to Cart"</button>
                </div>
            </div>
        </div>
    }
}

/// Grid of product cards.
#[component]
pub fn ProductGrid(products: Vec<Product>) -> impl IntoView {
    view! {
        <div class="products">
            {products
                .into_iter()
                .map(|p| view! { <ProductCard product=p/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

// ============================================================================
// Category Filter
// ============================================================================

/// "All Items" plus one link per category. Links keep the current search text.
#[component]
pub fn CategoryFilter(
    #[prop(into)] selected: Signal<CategorySelection>,
    #[prop(into)] text: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            <h3>"Categories"</h3>
            <div class="category-list">
                {CategorySelection::options()
                    .map(|option| {
                        view! {
                            <a
                                href=move || text.with(|t| browse_href(option, t))
                                class=move || {
                                    if selected.get() == option {
                                        "category-button selected"
                                    } else {
                                        "category-button"
                                    }
                                }
                            >
                                {option.label()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

// ============================================================================
// Small Pieces
// ============================================================================

/// Big number with a caption.
#[component]
pub fn StatCard(value: Signal<usize>, label: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <h3 class=format!("stat-value {}", tone)>{move || value.get().to_string()}</h3>
            <p class="muted">{label}</p>
        </div>
    }
}

/// Centered card with a message and a link.
#[component]
pub fn EmptyState(
    title: &'static str,
    message: &'static str,
    cta: &'static str,
    route: AppRoute,
) -> impl IntoView {
    view! {
        <div class="card empty-state">
            <h2>{title}</h2>
            <p class="muted">{message}</p>
            <a href=route.path() class="btn">{cta}</a>
        </div>
    }
}
