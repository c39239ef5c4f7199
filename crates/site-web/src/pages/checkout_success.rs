//! Checkout Success Page
//!
//! Landing view after redirect-back from the hosted payment page. The URL
//! only proves navigation; the payment is confirmed by polling the status
//! endpoint until it resolves or the attempts run out.

use std::time::Duration;

use async_trait::async_trait;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use site_core::{PollFailure, PollOutcome, Scheduler, SessionStatus, StatusPoller};

use crate::api::HttpStatusSource;

/// View state of the confirmation screen
#[derive(Clone, Debug, PartialEq)]
enum PaymentView {
    Checking,
    Success(SessionStatus),
    Error(String),
}

/// Wait between polls on the browser event loop. Once the owning view is
/// disposed the wait reports cancellation, so no further poll fires.
struct BrowserScheduler {
    disposed: StoredValue<bool>,
}

#[async_trait(?Send)]
impl Scheduler for BrowserScheduler {
    async fn wait(&self, interval: Duration) -> bool {
        if self.disposed.try_get_value().unwrap_or(true) {
            return false;
        }
        gloo_timers::future::TimeoutFuture::new(interval.as_millis() as u32).await;
        !self.disposed.try_get_value().unwrap_or(true)
    }
}

#[component]
pub fn CheckoutSuccessPage() -> impl IntoView {
    let query = use_query_map();
    let session_id = query
        .with_untracked(|q| q.get("session_id"))
        .filter(|id| !id.is_empty());

    // Missing session id is a navigation precondition failure, not a
    // transient one: error out without issuing any network call.
    let initial = if session_id.is_some() {
        PaymentView::Checking
    } else {
        PaymentView::Error(PollFailure::MissingSession.message().into())
    };
    let (view_state, set_view_state) = signal(initial);

    let disposed = StoredValue::new(false);
    on_cleanup(move || disposed.set_value(true));

    if let Some(id) = session_id.clone() {
        leptos::task::spawn_local(async move {
            let outcome = StatusPoller::default()
                .poll(&HttpStatusSource, &BrowserScheduler { disposed }, &id)
                .await;

            // Stale-response guard: the view may be gone by now.
            if disposed.try_get_value().unwrap_or(true) {
                return;
            }

            match outcome {
                PollOutcome::Paid(status) => set_view_state.set(PaymentView::Success(status)),
                PollOutcome::Failed(failure) => {
                    set_view_state.set(PaymentView::Error(failure.message().into()));
                }
                PollOutcome::Cancelled => {}
            }
        });
    }

    let session_ref = session_id.clone();
    view! {
        <div class="checkout-result">
            {move || match view_state.get() {
                PaymentView::Checking => view! { <CheckingView /> }.into_any(),
                PaymentView::Success(status) => {
                    view! { <SuccessView status=status session_id=session_ref.clone() /> }
                        .into_any()
                }
                PaymentView::Error(message) => {
                    view! { <ErrorView message=message session_id=session_ref.clone() /> }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn CheckingView() -> impl IntoView {
    view! {
        <div class="payment-checking">
            <div class="spinner"></div>
            <h2>"Checking Payment Status..."</h2>
            <p>"Please wait while we confirm your payment."</p>
        </div>
    }
}

#[component]
fn SuccessView(status: SessionStatus, session_id: Option<String>) -> impl IntoView {
    let amount = status.amount_display().unwrap_or_else(|| "—".into());
    let plan_name = status
        .metadata
        .plan_name
        .clone()
        .unwrap_or_else(|| "Custom Plan".into());
    let customer_email = status.metadata.customer_email.clone().filter(|e| !e.is_empty());

    let next_steps = [
        (
            "Check Your Email",
            "We've sent a confirmation email with your receipt and project details.",
        ),
        (
            "Project Kickoff Call",
            "Our team will contact you within 24 hours to schedule your project kickoff.",
        ),
        (
            "Project Timeline",
            "We'll provide a detailed project timeline and milestones during our kickoff call.",
        ),
    ];

    view! {
        <div class="payment-success">
            <div class="success-header">
                <h1>"Payment Successful!"</h1>
                <p>"Thank you for choosing Web X Media. We're excited to work with you!"</p>
            </div>

            <div class="card payment-details">
                <h2>"Payment Summary"</h2>
                <dl>
                    <dt>"Amount Paid"</dt>
                    <dd class="amount">{amount}</dd>
                    <dt>"Plan"</dt>
                    <dd>{plan_name}</dd>
                    {customer_email
                        .map(|email| {
                            view! {
                                <dt>"Email"</dt>
                                <dd>{email}</dd>
                            }
                        })}
                </dl>
            </div>

            <div class="card next-steps">
                <h2>"What Happens Next?"</h2>
                {next_steps
                    .into_iter()
                    .map(|(title, description)| {
                        view! {
                            <div class="step">
                                <h3>{title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="actions">
                <a href="/" class="btn btn-primary">"Back to Home"</a>
                <a href="/services" class="btn">"View Our Services"</a>
            </div>

            {session_id
                .map(|id| {
                    view! {
                        <div class="session-reference">
                            <p>"Reference ID: " <span class="mono">{id}</span></p>
                            <p>"Please save this ID for your records"</p>
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn ErrorView(message: String, session_id: Option<String>) -> impl IntoView {
    view! {
        <div class="payment-error">
            <h1>"Payment Status Unclear"</h1>
            <p class="message">{message}</p>

            <div class="card help-box">
                <h3>"Need Help?"</h3>
                {match session_id {
                    Some(id) => view! {
                        <p>
                            "If you were charged but received this error, please contact us "
                            "immediately with your session ID: "
                            <span class="mono">{id}</span>
                        </p>
                    }
                    .into_any(),
                    None => view! {
                        <p>"If you were charged, please contact us immediately."</p>
                    }
                    .into_any(),
                }}
                <div class="contact-links">
                    <a href="mailto:info@webxmedia.com">"info@webxmedia.com"</a>
                    <a href="tel:+919876543210">"+91 98765 43210"</a>
                </div>
            </div>

            <div class="actions">
                <a href="/" class="btn btn-primary">"Go Home"</a>
                <a href="/contact" class="btn">"Contact Support"</a>
            </div>
        </div>
    }
}
