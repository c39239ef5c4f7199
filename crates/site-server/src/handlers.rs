//! HTTP Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use site_core::{CreateSessionResponse, SessionStatus};
use site_payments::{PaymentTransaction, SessionSpec, TransactionStore, WebhookHandler};

use crate::contact::{ContactForm, ContactStore};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub stripe_configured: bool,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutSessionRequest {
    pub plan_type: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub custom_amount: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct ContactFormRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactFormResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, error: impl Into<String>, code: &str) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

fn payments_disabled() -> HandlerError {
    error_response(
        StatusCode::SERVICE_UNAVAILABLE,
        "Payments not configured",
        "PAYMENTS_DISABLED",
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        stripe_configured: state.stripe.is_some(),
    })
}

/// Create a Stripe checkout session for one order
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutSessionRequest>,
) -> Result<Json<CreateSessionResponse>, HandlerError> {
    let stripe = state.stripe.as_ref().ok_or_else(payments_disabled)?;

    // The chargeable amount is resolved from the catalog here, never
    // trusted from the client.
    let spec = SessionSpec::resolve(
        &payload.plan_type,
        payload.custom_amount,
        payload.customer_email,
    )
    .map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, e.user_message(), "INVALID_REQUEST")
    })?;

    let session = stripe
        .create_order_session(&spec, &state.public_url)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Checkout session creation failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                e.user_message(),
                "CHECKOUT_ERROR",
            )
        })?;

    // The customer already holds a live session; a bookkeeping failure is
    // logged rather than turned into a checkout failure.
    if let Err(e) = state
        .transactions
        .save(&PaymentTransaction::new(&session.id, &spec))
    {
        tracing::warn!(session_id = %session.id, error = %e, "Failed to record transaction");
    }

    tracing::info!(session_id = %session.id, plan = %spec.plan, "Checkout session created");

    Ok(Json(CreateSessionResponse {
        url: session.url,
        session_id: session.id,
    }))
}

/// Poll the payment status of one session
pub async fn checkout_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionStatus>, HandlerError> {
    let stripe = state.stripe.as_ref().ok_or_else(payments_disabled)?;

    let status = stripe.fetch_status(&session_id).await.map_err(|e| {
        tracing::error!(session_id = %session_id, error = %e, "Status check failed");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to check payment status",
            "STATUS_ERROR",
        )
    })?;

    if let Err(e) = state.transactions.update_status(
        &session_id,
        status.status.as_deref(),
        status.payment_status.as_deref(),
    ) {
        tracing::warn!(session_id = %session_id, error = %e, "Failed to update transaction");
    }

    Ok(Json(status))
}

/// Accept a contact form submission
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactFormRequest>,
) -> Result<Json<ContactFormResponse>, HandlerError> {
    let form = ContactForm::new(
        payload.name,
        payload.email,
        payload.phone,
        payload.service,
        payload.message,
    );

    state.contacts.save(&form).map_err(|e| {
        tracing::error!(error = %e, "Failed to store contact form");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to submit form",
            "CONTACT_ERROR",
        )
    })?;

    tracing::info!(id = %form.id, email = %form.email, "Contact form submitted");

    Ok(Json(ContactFormResponse {
        success: true,
        message: "Contact form submitted successfully",
    }))
}

/// List stored contact submissions
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactForm>>, HandlerError> {
    let forms = state.contacts.list().map_err(|e| {
        tracing::error!(error = %e, "Failed to list contact forms");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to list forms",
            "CONTACT_ERROR",
        )
    })?;

    Ok(Json(forms))
}

/// Stripe webhook handler
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<StatusCode, HandlerError> {
    let stripe = state.stripe.as_ref().ok_or_else(payments_disabled)?;

    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            error_response(
                StatusCode::BAD_REQUEST,
                "Missing Stripe signature",
                "MISSING_SIGNATURE",
            )
        })?;

    let handler = WebhookHandler::new(state.transactions.clone());

    let event = handler
        .parse_event(&body, signature, stripe.webhook_secret())
        .map_err(|e| {
            tracing::warn!(error = %e, "Webhook signature failed");
            error_response(StatusCode::BAD_REQUEST, "Invalid signature", "INVALID_SIGNATURE")
        })?;

    handler.handle(&event).map_err(|e| {
        tracing::error!(error = %e, "Webhook processing error");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Webhook processing failed",
            "WEBHOOK_ERROR",
        )
    })?;

    Ok(StatusCode::OK)
}
