//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Plan code not in the catalog
    #[error("Invalid plan type: {0}")]
    InvalidPlan(String),

    /// Custom amount missing or non-positive
    #[error("Invalid custom amount")]
    InvalidAmount,

    /// Webhook signature verification failed
    #[error("Webhook signature invalid: {0}")]
    WebhookSignature(String),

    /// Webhook payload parsing failed
    #[error("Webhook parse error: {0}")]
    WebhookParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PaymentError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, PaymentError::Stripe(_) | PaymentError::Storage(_))
    }

    /// True for errors caused by the request itself rather than the service
    pub fn is_request_error(&self) -> bool {
        matches!(self, PaymentError::InvalidPlan(_) | PaymentError::InvalidAmount)
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            PaymentError::Stripe(_) => "Payment processing failed. Please try again.",
            PaymentError::InvalidPlan(_) => "Invalid plan type",
            PaymentError::InvalidAmount => "Invalid custom amount",
            PaymentError::Config(_) => "Service configuration error.",
            _ => "An error occurred processing your request.",
        }
    }
}
