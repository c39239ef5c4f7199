//! Checkout Page
//!
//! Derives the order from the `plan`/`price` query parameters, validates the
//! customer's input locally, and hands off to the hosted payment page.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use site_core::{CheckoutQuery, Order};

use crate::api;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let query = use_query_map();
    let checkout_query =
        query.with_untracked(|q| CheckoutQuery::new(q.get("plan"), q.get("price")));
    let plan = checkout_query.plan();
    let details = plan.details();
    let url_price = checkout_query.price;

    let (email, set_email) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    // Displayed total: the entered amount for the custom plan, otherwise the
    // URL override or the catalog price.
    let total = move || {
        if details.is_custom {
            let entered = amount.get();
            if entered.trim().is_empty() { "0".to_string() } else { entered }
        } else {
            url_price.unwrap_or(details.base_price).to_string()
        }
    };

    let checkout = move |_| {
        // A click while a request is in flight is ignored.
        if loading.get() {
            return;
        }
        set_error.set(None);

        let custom_input = details.is_custom.then(|| amount.get());
        let order = match Order::build(plan, url_price, &email.get(), custom_input.as_deref()) {
            Ok(order) => order,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };

        set_loading.set(true);
        let request = order.to_request();
        leptos::task::spawn_local(async move {
            match api::create_checkout_session(&request).await {
                Ok(url) => {
                    // Control leaves the app here; the hosted page redirects
                    // back to /checkout/success or /checkout/cancel.
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                Err(message) => {
                    set_error.set(Some(message));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="checkout">
            <div class="checkout-header">
                <a href="/services" class="back-link">"← Back to Services"</a>
                <h1>"Checkout"</h1>
            </div>

            <div class="checkout-grid">
                <aside class="order-summary">
                    <h2>"Order Summary"</h2>

                    <div class="summary-plan">
                        <div>
                            <h3>{details.name}</h3>
                            <Show when=move || details.popular>
                                <span class="badge">"★ Most Popular"</span>
                            </Show>
                        </div>
                        <span class="price">"$" {total}</span>
                    </div>

                    <div class="summary-features">
                        <h4>"What's Included:"</h4>
                        <ul>
                            {details
                                .features
                                .iter()
                                .map(|feature| view! { <li>"✓ " {*feature}</li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="summary-meta">
                        <p>"Delivery: " {details.delivery}</p>
                        <p>"Dedicated support included"</p>
                    </div>

                    <div class="summary-total">
                        <span>"Total:"</span>
                        <span>"$" {total}</span>
                    </div>
                </aside>

                <section class="payment-form">
                    <h2>"Payment Details"</h2>

                    <Show when=move || error.get().is_some()>
                        <div class="banner banner-error">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="field">
                        <label for="email">"Email Address *"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="your@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <p class="hint">
                            "We'll send your receipt and project updates to this email."
                        </p>
                    </div>

                    <Show when=move || details.is_custom>
                        <div class="field">
                            <label for="amount">"Custom Amount (USD) *"</label>
                            <input
                                id="amount"
                                type="number"
                                min="1"
                                step="0.01"
                                placeholder="Enter your budget"
                                prop:value=move || amount.get()
                                on:input=move |ev| set_amount.set(event_target_value(&ev))
                            />
                            <p class="hint">
                                "Enter the amount you'd like to pay for your custom project."
                            </p>
                        </div>
                    </Show>

                    <div class="secure-note">
                        <h3>"Secure Payment with Stripe"</h3>
                        <p>
                            "Your payment information is encrypted and secure. "
                            "We never store your card details."
                        </p>
                    </div>

                    <button
                        class="btn btn-primary submit"
                        disabled=move || loading.get()
                        on:click=checkout
                    >
                        {move || {
                            if loading.get() {
                                "Processing...".to_string()
                            } else {
                                format!("Proceed to Payment - ${}", total())
                            }
                        }}
                    </button>

                    <p class="fine-print">
                        "By proceeding, you agree to our Terms of Service and Privacy Policy. "
                        "You will be redirected to Stripe for secure payment processing."
                    </p>
                </section>
            </div>
        </div>
    }
}
