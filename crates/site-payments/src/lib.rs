//! # site-payments
//!
//! Stripe checkout integration for the Web X Media site.
//!
//! The site uses the "Stripe Checkout (Hosted)" approach: the backend
//! creates a one-time-payment session, the customer pays on Stripe's hosted
//! page, and the success page confirms the payment by polling the status
//! endpoint rather than trusting the redirect URL alone.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌──────────────────┐
//! │  /checkout  │────▶│  Stripe Hosted  │────▶│ /checkout/success│
//! │ (this site) │     │  Checkout Page  │     │   (this site)    │
//! └─────────────┘     └─────────────────┘     └──────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use site_payments::{SessionSpec, StripeClient};
//!
//! let client = StripeClient::new("sk_test_xxx", "whsec_xxx");
//! let spec = SessionSpec::resolve("silver", None, Some("user@example.com".into()))?;
//! let session = client.create_order_session(&spec, "https://webxmedia.com").await?;
//!
//! // Redirect user to: session.url
//! ```

mod checkout;
mod error;
mod store;
mod webhook;

pub use checkout::{CreatedSession, SessionSpec, StripeClient};
pub use error::{PaymentError, Result};
pub use store::{MemoryTransactionStore, PaymentTransaction, TransactionStore};
pub use webhook::{WebhookEvent, WebhookHandler};
