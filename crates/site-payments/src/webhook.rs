//! Stripe Webhook Handling
//!
//! Keeps the transaction store current with checkout-session lifecycle
//! events. Bookkeeping only; the status endpoint stays the authoritative
//! read path for the frontend.

use std::sync::Arc;

use stripe::{CheckoutSessionPaymentStatus, Event, EventObject, EventType, Webhook};

use crate::error::{PaymentError, Result};
use crate::store::TransactionStore;

/// Parsed webhook event
#[derive(Clone, Debug)]
pub enum WebhookEvent {
    /// Checkout completed - payment settled
    SessionCompleted {
        session_id: String,
        payment_status: String,
    },

    /// Session expired before payment
    SessionExpired { session_id: String },

    /// Deferred payment method ultimately failed
    PaymentFailed { session_id: String },

    /// Unhandled event type
    Other { event_type: String },
}

/// Webhook handler
pub struct WebhookHandler<S: TransactionStore> {
    store: Arc<S>,
}

impl<S: TransactionStore> WebhookHandler<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Verify webhook signature and parse event
    pub fn parse_event(&self, payload: &str, signature: &str, secret: &str) -> Result<Event> {
        Webhook::construct_event(payload, signature, secret)
            .map_err(|e| PaymentError::WebhookSignature(e.to_string()))
    }

    /// Process a webhook event
    pub fn handle(&self, event: &Event) -> Result<WebhookEvent> {
        tracing::info!(event_type = ?event.type_, "Processing Stripe webhook");

        let parsed = parse_webhook_event(event)?;

        match &parsed {
            WebhookEvent::SessionCompleted {
                session_id,
                payment_status,
            } => {
                self.store
                    .update_status(session_id, Some("complete"), Some(payment_status))?;

                tracing::info!(
                    session_id = %session_id,
                    payment_status = %payment_status,
                    "Checkout session completed"
                );
            }

            WebhookEvent::SessionExpired { session_id } => {
                self.store.update_status(session_id, Some("expired"), None)?;

                tracing::info!(session_id = %session_id, "Checkout session expired");
            }

            WebhookEvent::PaymentFailed { session_id } => {
                self.store
                    .update_status(session_id, None, Some("unpaid"))?;

                tracing::warn!(session_id = %session_id, "Async payment failed");
            }

            WebhookEvent::Other { event_type } => {
                tracing::debug!(event_type = %event_type, "Unhandled webhook event");
            }
        }

        Ok(parsed)
    }
}

/// Parse Stripe event into our event type
fn parse_webhook_event(event: &Event) -> Result<WebhookEvent> {
    match event.type_ {
        EventType::CheckoutSessionCompleted | EventType::CheckoutSessionAsyncPaymentSucceeded => {
            if let EventObject::CheckoutSession(session) = &event.data.object {
                let payment_status = match session.payment_status {
                    CheckoutSessionPaymentStatus::Paid => "paid",
                    CheckoutSessionPaymentStatus::Unpaid => "unpaid",
                    CheckoutSessionPaymentStatus::NoPaymentRequired => "no_payment_required",
                };

                Ok(WebhookEvent::SessionCompleted {
                    session_id: session.id.to_string(),
                    payment_status: payment_status.to_string(),
                })
            } else {
                Err(PaymentError::WebhookParse("Invalid checkout session data".into()))
            }
        }

        EventType::CheckoutSessionExpired => {
            if let EventObject::CheckoutSession(session) = &event.data.object {
                Ok(WebhookEvent::SessionExpired {
                    session_id: session.id.to_string(),
                })
            } else {
                Err(PaymentError::WebhookParse("Invalid checkout session data".into()))
            }
        }

        EventType::CheckoutSessionAsyncPaymentFailed => {
            if let EventObject::CheckoutSession(session) = &event.data.object {
                Ok(WebhookEvent::PaymentFailed {
                    session_id: session.id.to_string(),
                })
            } else {
                Err(PaymentError::WebhookParse("Invalid checkout session data".into()))
            }
        }

        _ => Ok(WebhookEvent::Other {
            event_type: format!("{:?}", event.type_),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTransactionStore;

    #[test]
    fn test_webhook_handler_creation() {
        let store = Arc::new(MemoryTransactionStore::new());
        let _handler = WebhookHandler::new(store);
    }
}
