use crate::components::ProductGrid;
use crate::state::use_market;
use ecofinds_commerce::prelude::*;
use ecofinds_commerce::session::Action;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DashboardTab {
    Profile,
    Purchases,
    Favorites,
    Activity,
}

impl DashboardTab {
    const ALL: [DashboardTab; 4] = [
        DashboardTab::Profile,
        DashboardTab::Purchases,
        DashboardTab::Favorites,
        DashboardTab::Activity,
    ];

    fn label(&self) -> &'static str {
        match self {
            DashboardTab::Profile => "Profile",
            DashboardTab::Purchases => "Purchases",
            DashboardTab::Favorites => "Favorites",
            DashboardTab::Activity => "Activity",
        }
    }
}

/// User dashboard: profile, purchases, favorites and recent activity.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let tab = RwSignal::new(DashboardTab::Profile);

    view! {
        <div class="page-heading">
            <h1>"My Dashboard"</h1>
            <p class="lead">"Manage your profile and track your sustainable marketplace journey"</p>
        </div>

        <div class="tabs" role="tablist">
            {DashboardTab::ALL
                .into_iter()
                .map(|t| {
                    view! {
                        <button
                            role="tab"
                            class=move || if tab.get() == t { "tab active" } else { "tab" }
                            on:click=move |_| tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>

        {move || match tab.get() {
            DashboardTab::Profile => view! { <ProfileCard/> }.into_any(),
            DashboardTab::Purchases => view! { <PurchaseHistory/> }.into_any(),
            DashboardTab::Favorites => view! { <Favorites/> }.into_any(),
            DashboardTab::Activity => view! { <RecentActivity/> }.into_any(),
        }}
    }
}

// ============================================================================
// Tabs
// ============================================================================

#[component]
fn ProfileCard() -> impl IntoView {
    let market = use_market();
    let editing = Memo::new(move |_| market.session.with(|s| s.profile.is_editing()));
    let profile = Memo::new(move |_| market.session.with(|s| s.profile.profile().clone()));

    let fields = ProfileField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <div class="field">
                    <label for=field.id()>{field.label()}</label>
                    <input
                        id=field.id()
                        prop:value=move || profile.with(|p| p.field(field).to_string())
                        disabled=move || !editing.get()
                        on:input=move |ev| {
                            market.dispatch(Action::SetProfileField {
                                field,
                                value: event_target_value(&ev),
                            })
                        }
                    />
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Profile Information"</h2>
                <button class="btn btn-outline" on:click=move |_| market.dispatch(Action::ToggleProfileEdit)>
                    {move || if editing.get() { "Save" } else { "Edit" }}
                </button>
            </div>
            <div class="profile-summary">
                <div class="avatar">{move || profile.with(|p| p.avatar_initial())}</div>
                <div>
                    <h3>{move || profile.with(|p| p.username.clone())}</h3>
                    <p class="muted">{move || profile.with(|p| format!("Member since {}", p.member_since()))}</p>
                </div>
            </div>
            <div class="profile-fields">{fields}</div>
        </div>
    }
}

#[component]
fn PurchaseHistory() -> impl IntoView {
    let market = use_market();

    view! {
        <div class="card">
            <h2>"Purchase History"</h2>
            {move || {
                let orders = market.session.with(|s| s.orders.clone());
                if orders.is_empty() {
                    view! {
                        <p class="muted center">"No purchases yet. Start shopping to see your order history here!"</p>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul class="order-list">
                            {orders
                                .into_iter()
                                .rev()
                                .map(|order| {
                                    view! {
                                        <li class="order-row">
                                            <div>
                                                <strong>{order.label()}</strong>
                                                <p class="muted small">
                                                    {format!("{} items", order.item_count())}
                                                </p>
                                            </div>
                                            <span class="price">{order.totals.total.display()}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn Favorites() -> impl IntoView {
    let market = use_market();

    view! {
        <div class="card">
            <h2>"Favorite Items"</h2>
            {move || {
                let products = market
                    .session
                    .with(|s| s.favorite_products().into_iter().cloned().collect::<Vec<_>>());
                if products.is_empty() {
                    view! {
                        <p class="muted center">"No favorites yet. Heart items you love to save them here!"</p>
                    }
                        .into_any()
                } else {
                    view! { <ProductGrid products=products/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn RecentActivity() -> impl IntoView {
    let market = use_market();

    view! {
        <div class="card">
            <h2>"Recent Activity"</h2>
            {move || {
                let activity = market.session.with(|s| s.activity.clone());
                if activity.is_empty() {
                    view! {
                        <p class="muted center">"Your recent marketplace activity will appear here."</p>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul class="activity-list">
                            {activity
                                .into_iter()
                                .map(|n| {
                                    view! {
                                        <li>
                                            <strong>{n.title}</strong>
                                            <p class="muted small">{n.description}</p>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Profile", "Purchases", "Favorites", "Activity"]);
    }
}
