//! Application State

use std::sync::Arc;

use site_payments::{MemoryTransactionStore, StripeClient};

use crate::contact::MemoryContactStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Stripe client (optional - None if not configured)
    pub stripe: Option<Arc<StripeClient>>,

    /// Payment transaction bookkeeping
    pub transactions: Arc<MemoryTransactionStore>,

    /// Contact form submissions
    pub contacts: Arc<MemoryContactStore>,

    /// Externally visible site origin, used for Stripe redirect URLs
    pub public_url: String,
}
