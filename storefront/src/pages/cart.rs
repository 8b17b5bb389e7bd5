use crate::components::EmptyState;
use crate::state::use_market;
use ecofinds_commerce::prelude::*;
use ecofinds_commerce::session::Action;
use ecofinds_core::AppRoute;
use leptos::prelude::*;

/// Shopping cart page
#[component]
pub fn CartPage() -> impl IntoView {
    let market = use_market();
    let is_empty = Memo::new(move |_| market.session.with(|s| s.cart.is_empty()));

    move || {
        if is_empty.get() {
            view! {
                <EmptyState
                    title="Your cart is empty"
                    message="Start adding some sustainable finds to your cart!"
                    cta="Start Shopping"
                    route=AppRoute::Browse
                />
            }
            .into_any()
        } else {
            view! { <CartContents/> }.into_any()
        }
    }
}

#[component]
fn CartContents() -> impl IntoView {
    let market = use_market();

    view! {
        <div class="page-heading">
            <h1>"Shopping Cart"</h1>
            <p class="lead">"Review your sustainable finds before checkout"</p>
        </div>

        <div class="cart-layout">
            <div class="cart-lines">
                <For
                    each=move || market.session.with(|s| s.cart.lines().to_vec())
                    key=|line| line.id.clone()
                    children=move |line| view! { <CartLine line=line/> }
                />
            </div>
            <OrderSummary/>
        </div>
    }
}

/// One line with quantity controls. Quantity is read live from the session
/// so the row survives quantity changes.
#[component]
fn CartLine(line: LineItem) -> impl IntoView {
    let market = use_market();
    let id = line.id.clone();
    let quantity = Memo::new(move |_| {
        market
            .session
            .with(|s| s.cart.get(&id).map(|l| l.quantity).unwrap_or_default())
    });
    let price = line.price;

    let dec_id = line.id.clone();
    let inc_id = line.id.clone();
    let remove_id = line.id.clone();

    view! {
        <div class="card cart-line">
            <div class="cart-art">
                <span class="placeholder-initial">{line.initial()}</span>
            </div>
            <div class="cart-details">
                <div class="cart-line-head">
                    <div>
                        <h3>{line.title}</h3>
                        <p class="muted small">"by " {line.seller} " \u{2022} " {line.category.name()}</p>
                    </div>
                    <button
                        class="btn-icon danger"
                        aria-label="Remove"
                        on:click=move |_| market.dispatch(Action::RemoveLine(remove_id.clone()))
                    >
                        "\u{1f5d1}"
                    </button>
                </div>
                <div class="cart-line-foot">
                    <div class="quantity">
                        <button
                            class="btn-icon"
                            aria-label="Decrease quantity"
                            disabled=move || quantity.get() <= 1
                            on:click=move |_| market.dispatch(Action::DecrementQuantity(dec_id.clone()))
                        >
                            "\u{2212}"
                        </button>
                        <span>{move || quantity.get().to_string()}</span>
                        <button
                            class="btn-icon"
                            aria-label="Increase quantity"
                            on:click=move |_| market.dispatch(Action::IncrementQuantity(inc_id.clone()))
                        >
                            "+"
                        </button>
                    </div>
                    <p class="price">{move || (price * quantity.get()).display()}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn OrderSummary() -> impl IntoView {
    let market = use_market();
    let totals = Memo::new(move |_| market.session.with(|s| s.cart_totals()));
    let line_count = Memo::new(move |_| market.session.with(|s| s.cart.line_count()));
    let notice = market.session.with_untracked(|s| s.shipping.notice());

    view! {
        <div class="card order-summary">
            <h2>"Order Summary"</h2>
            <div class="summary-row">
                <span>{move || format!("Subtotal ({} items)", line_count.get())}</span>
                <span>{move || totals.get().subtotal.display()}</span>
            </div>
            <div class="summary-row">
                <span>"Shipping"</span>
                {move || {
                    let totals = totals.get();
                    if totals.is_free_shipping() {
                        view! { <span class="free">"Free"</span> }.into_any()
                    } else {
                        view! { <span>{totals.shipping.display()}</span> }.into_any()
                    }
                }}
            </div>
            <Show when=move || !totals.get().is_free_shipping()>
                <p class="muted small">{notice.clone()}</p>
            </Show>
            <hr/>
            <div class="summary-row total">
                <span>"Total"</span>
                <span class="price">{move || totals.get().total.display()}</span>
            </div>
            <button class="btn btn-block btn-lg" on:click=move |_| market.dispatch(Action::Checkout)>
                "Proceed to Checkout"
            </button>
            <a href=AppRoute::Browse.path() class="btn btn-outline btn-block">"Continue Shopping"</a>
        </div>
    }
}
