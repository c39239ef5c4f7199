//! Checkout Cancel Page
//!
//! Landing view when the customer backs out of the hosted payment page.
//! Nothing was charged; offer ways forward instead of a dead end.

use leptos::prelude::*;

#[component]
pub fn CheckoutCancelPage() -> impl IntoView {
    let reasons = [
        (
            "Need More Information?",
            "Contact us for a detailed consultation about your project requirements.",
            ("Contact Us", "/contact"),
        ),
        (
            "Want to Modify Your Plan?",
            "Explore our different service packages to find the perfect fit for your needs.",
            ("View Plans", "/services"),
        ),
        (
            "Prefer to Talk First?",
            "Schedule a free consultation call to discuss your project in detail.",
            ("Schedule Call", "/contact"),
        ),
    ];

    let benefits = [
        "Free initial consultation",
        "Transparent pricing with no hidden fees",
        "30-day money-back guarantee",
        "Experienced team of professionals",
        "Ongoing support and maintenance",
        "Portfolio of 500+ successful projects",
    ];

    view! {
        <div class="checkout-cancel">
            <div class="cancel-header">
                <h1>"Payment Cancelled"</h1>
                <p>
                    "No worries! Your payment was not processed. "
                    "We're still here to help you succeed."
                </p>
            </div>

            <div class="card cancel-reasons">
                <h2>"How Can We Help You Move Forward?"</h2>
                <div class="grid">
                    {reasons
                        .into_iter()
                        .map(|(title, description, (action, link))| {
                            view! {
                                <div class="reason">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                    <a href=link class="btn">{action}</a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card benefits">
                <h2>"Why Businesses Trust Web X Media"</h2>
                <ul>
                    {benefits
                        .into_iter()
                        .map(|benefit| view! { <li>{benefit}</li> })
                        .collect_view()}
                </ul>
            </div>

            <div class="card special-offer">
                <h2>"Special Offer: Free Consultation Worth $100"</h2>
                <p>
                    "Since you're considering our services, we'd like to offer you a "
                    "complimentary project consultation to discuss your needs and provide "
                    "personalized recommendations."
                </p>
                <a href="/contact" class="btn btn-primary">"Claim Free Consultation"</a>
            </div>

            <div class="actions">
                <a href="/services" class="btn btn-primary">"← Back to Services"</a>
                <a href="/" class="btn">"Go to Homepage"</a>
            </div>
        </div>
    }
}
