//! # site-core
//!
//! Shared checkout logic for the Web X Media site: the plan catalog, order
//! derivation, the wire types of the backend API, and the payment status
//! poller that runs after the customer returns from the hosted payment page.
//!
//! ## Checkout flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌──────────────────┐
//! │  /checkout  │────▶│  Hosted Stripe  │────▶│ /checkout/success│
//! │ (order form)│     │  payment page   │     │  (status poller) │
//! └─────────────┘     └─────────────────┘     └──────────────────┘
//! ```
//!
//! The crate is HTTP-free and compiles for both wasm32 and native targets;
//! the frontend and the server plug their own transports into the
//! [`StatusSource`] / [`Scheduler`] seams.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use site_core::{Order, Plan, StatusPoller};
//!
//! let order = Order::build(Plan::Silver, None, "user@example.com", None)?;
//! let request = order.to_request();
//! // POST request to /api/checkout/session, redirect to the returned URL...
//!
//! let outcome = StatusPoller::default()
//!     .poll(&source, &scheduler, &session_id)
//!     .await;
//! ```

mod error;
mod order;
mod plan;
mod poller;
mod session;

pub use error::{Result, SiteError, ValidationError};
pub use order::{CheckoutQuery, Order, compute_amount};
pub use plan::{Plan, PlanDetails, UnknownPlan};
pub use poller::{
    MAX_ATTEMPTS, POLL_INTERVAL, PollFailure, PollOutcome, Scheduler, StatusPoller, StatusSource,
};
pub use session::{
    CreateSessionRequest, CreateSessionResponse, SessionMetadata, SessionStatus, StatusCheck,
};
