//! API Client
//!
//! Thin HTTP layer over the backend. Session creation and the contact form
//! are fire-once calls with no automatic retry; status polling goes through
//! the [`StatusSource`] seam so the poller in site-core stays
//! transport-free.

use std::sync::OnceLock;

use async_trait::async_trait;
use serde::Serialize;

use site_core::{CreateSessionRequest, Result, SessionStatus, SiteError, StatusSource};

/// Backend origin, resolved from the window once at startup
pub fn backend_url() -> &'static str {
    static BASE: OnceLock<String> = OnceLock::new();
    BASE.get_or_init(|| {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3000".into())
    })
}

fn api_url(path: &str) -> String {
    format!("{}{}", backend_url(), path)
}

/// Create a checkout session; returns the hosted payment page URL.
///
/// Single attempt by design: retrying an ambiguous session-creation call
/// risks duplicate sessions. Errors carry the server's message when one was
/// supplied.
pub async fn create_checkout_session(request: &CreateSessionRequest) -> std::result::Result<String, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(api_url("/api/checkout/session"))
        .json(request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    let data: serde_json::Value = response.json().await.unwrap_or_default();

    if status.is_success() {
        match data["url"].as_str() {
            Some(url) if !url.is_empty() => Ok(url.to_string()),
            // A 2xx body without a redirect URL is a server fault
            _ => Err("Failed to create checkout session".into()),
        }
    } else {
        Err(data["error"]
            .as_str()
            .or_else(|| data["detail"].as_str())
            .unwrap_or("Failed to create checkout session")
            .to_string())
    }
}

/// Contact form fields as submitted
#[derive(Clone, Debug, Default, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// Submit the contact form (fire-once, no retry)
pub async fn submit_contact(form: &ContactSubmission) -> std::result::Result<(), String> {
    let client = reqwest::Client::new();

    let response = client
        .post(api_url("/api/contact"))
        .json(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        Ok(())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"]
            .as_str()
            .unwrap_or("Failed to submit form")
            .to_string())
    }
}

/// Status endpoint client plugged into the poller
pub struct HttpStatusSource;

#[async_trait(?Send)]
impl StatusSource for HttpStatusSource {
    async fn fetch_status(&self, session_id: &str) -> Result<SessionStatus> {
        let client = reqwest::Client::new();

        let response = client
            .get(api_url(&format!("/api/checkout/status/{session_id}")))
            .send()
            .await
            .map_err(|e| SiteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SiteError::Api {
                status: status.as_u16(),
                message: "Failed to check payment status".into(),
            });
        }

        response
            .json::<SessionStatus>()
            .await
            .map_err(|e| SiteError::MalformedResponse(e.to_string()))
    }
}
