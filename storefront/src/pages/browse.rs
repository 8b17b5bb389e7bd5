use crate::components::{CategoryFilter, ProductGrid};
use crate::state::use_market;
use ecofinds_commerce::catalog::CategorySelection;
use ecofinds_commerce::search::SearchQuery;
use ecofinds_core::{browse_href, AppRoute};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

/// Search query described by the browse URL parameters.
fn query_from_params(category: Option<String>, text: Option<String>) -> SearchQuery {
    let selection = category
        .map(|id| CategorySelection::from_id(&id))
        .unwrap_or_default();
    SearchQuery::new()
        .with_category(selection)
        .with_text(text.unwrap_or_default())
}

/// Catalog browser. The URL (`?category=..&q=..`) holds the filter state, so
/// links from the header search and back/forward navigation restore it.
#[component]
pub fn BrowsePage() -> impl IntoView {
    let market = use_market();
    let params = use_query_map();
    let navigate = use_navigate();

    let query = Memo::new(move |_| {
        params.with(|p| query_from_params(p.get("category"), p.get("q")))
    });
    let selection = Memo::new(move |_| query.with(|q| q.category));
    let text = Memo::new(move |_| query.with(|q| q.text.clone()));

    let on_input = move |ev: leptos::ev::Event| {
        let href = browse_href(selection.get_untracked(), &event_target_value(&ev));
        navigate(
            &href,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    let results = move || {
        market.session.with(|s| {
            query.with(|q| {
                let results = q.apply(s.catalog.as_slice());
                let summary = results.summary();
                let products = results.into_products().into_iter().cloned().collect::<Vec<_>>();
                (summary, products)
            })
        })
    };

    view! {
        <div class="page-heading">
            <h1>"Browse Sustainable Finds"</h1>
            <p class="lead">"Discover amazing pre-loved items from our community"</p>
        </div>

        <div class="search-bar">
            <input
                type="search"
                placeholder="Search products..."
                prop:value=move || text.get()
                on:input=on_input
            />
        </div>

        <div class="browse-layout">
            <aside class="sidebar">
                <CategoryFilter selected=selection text=text/>
            </aside>

            <section class="browse-results">
                {move || {
                    let (summary, products) = results();
                    if products.is_empty() {
                        view! {
                            <p class="muted">{summary}</p>
                            <div class="empty-results">
                                <p class="lead">"No products found matching your criteria."</p>
                                <a href=AppRoute::Browse.path() class="btn btn-outline">"Clear Filters"</a>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <p class="muted">{summary}</p>
                            <ProductGrid products=products/>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecofinds_commerce::catalog::Category;

    #[test]
    fn test_query_from_params() {
        let q = query_from_params(Some("books".into()), Some("gatsby".into()));
        assert_eq!(q.category, CategorySelection::Only(Category::Books));
        assert_eq!(q.text, "gatsby");
    }

    #[test]
    fn test_query_from_missing_or_unknown_params() {
        assert_eq!(query_from_params(None, None), SearchQuery::default());
        let q = query_from_params(Some("furniture".into()), None);
        assert_eq!(q.category, CategorySelection::All);
    }
}
