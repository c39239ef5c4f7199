//! Error Types

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors raised while talking to the backend API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// Network failure before a response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx response from the backend
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 2xx response whose body could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Local input validation failed
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SiteError {
    /// Check if this error is worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self, SiteError::Transport(_) | SiteError::Api { .. })
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            SiteError::Validation(err) => err.to_string(),
            SiteError::Api { message, .. } if !message.is_empty() => message.clone(),
            SiteError::Config(_) => "Service configuration error.".into(),
            _ => "Something went wrong. Please try again.".into(),
        }
    }
}

/// Pre-flight checkout form errors, reported inline and never sent over
/// the network. The messages are the exact strings shown next to the form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Customer email missing or blank
    #[error("Please enter your email address")]
    MissingEmail,

    /// Custom amount missing, non-numeric, non-positive, or more than
    /// 2 decimal places
    #[error("Please enter a valid amount")]
    InvalidAmount,
}
