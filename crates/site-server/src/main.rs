//! Web X Media HTTP Server
//!
//! Axum-based server providing the checkout and contact APIs and serving
//! the WASM frontend. The Stripe hosted checkout page and the payment
//! provider itself stay external; this server only creates sessions,
//! answers status queries, and keeps transaction bookkeeping.

mod contact;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_payments::{MemoryTransactionStore, StripeClient};

use crate::contact::MemoryContactStore;
use crate::handlers::{
    checkout_status, create_checkout_session, health_check, list_contacts, stripe_webhook,
    submit_contact,
};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize payments
    let stripe = StripeClient::from_env().ok();

    if stripe.is_some() {
        tracing::info!("✓ Stripe configured");
    } else {
        tracing::warn!("⚠ Stripe not configured - checkout disabled");
        tracing::warn!("  Set STRIPE_SECRET_KEY and STRIPE_WEBHOOK_SECRET in .env");
    }

    let public_url = std::env::var("PUBLIC_URL").unwrap_or_else(|_| "http://localhost:3000".into());

    // Build application state
    let state = AppState {
        stripe: stripe.map(Arc::new),
        transactions: Arc::new(MemoryTransactionStore::new()),
        contacts: Arc::new(MemoryContactStore::new()),
        public_url,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static files (WASM frontend); unknown paths fall back to the SPA shell
    let frontend = ServeDir::new("static").not_found_service(ServeFile::new("static/index.html"));

    // Build router
    let app = Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Checkout API
        .route("/api/checkout/session", post(create_checkout_session))
        .route("/api/checkout/status/{session_id}", get(checkout_status))
        // Contact API
        .route("/api/contact", post(submit_contact).get(list_contacts))
        // Payments webhook
        .route("/webhook/stripe", post(stripe_webhook))
        // Frontend
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 Web X Media server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                            - Health check");
    tracing::info!("  POST /api/checkout/session              - Create checkout session");
    tracing::info!("  GET  /api/checkout/status/{{session_id}}  - Poll payment status");
    tracing::info!("  POST /api/contact                       - Submit contact form");
    tracing::info!("  POST /webhook/stripe                    - Stripe webhook");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
