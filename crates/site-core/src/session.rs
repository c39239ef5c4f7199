//! Checkout Session Wire Types
//!
//! Request/response shapes shared by the frontend and the backend API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::plan::Plan;

/// Body of `POST /api/checkout/session`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Plan code ("bronze", "silver", "gold", "custom")
    pub plan_type: Plan,

    /// Customer email for the receipt
    pub customer_email: String,

    /// Customer-entered amount; only set for the custom plan
    #[serde(default)]
    pub custom_amount: Option<Decimal>,
}

/// Body of a successful `POST /api/checkout/session` response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    /// Hosted payment page to redirect the customer to
    pub url: String,

    /// Opaque session identifier assigned by the payment provider
    pub session_id: String,
}

/// Metadata bag echoed back by the payment provider
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

/// Body of `GET /api/checkout/status/{session_id}`.
///
/// Every field tolerates absence; the provider's answer for a young session
/// can be sparse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    /// Session lifecycle: "open", "complete", "expired"
    #[serde(default)]
    pub status: Option<String>,

    /// Payment state: "paid", "unpaid", "no_payment_required"
    #[serde(default)]
    pub payment_status: Option<String>,

    /// Amount in minor currency units (cents)
    #[serde(default)]
    pub amount_total: Option<i64>,

    /// ISO currency code, lowercase ("usd")
    #[serde(default)]
    pub currency: Option<String>,

    #[serde(default)]
    pub metadata: SessionMetadata,
}

/// Classification of one status response, the input to the poller's
/// transition function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusCheck {
    /// Payment confirmed by the provider
    Paid,

    /// Session expired; terminal, never retried
    Expired,

    /// Payment still in flight
    Pending,
}

impl SessionStatus {
    /// Classify this response. A paid `payment_status` wins over everything
    /// else; the session id appearing in a URL proves nothing by itself.
    pub fn classify(&self) -> StatusCheck {
        if self.payment_status.as_deref() == Some("paid") {
            StatusCheck::Paid
        } else if self.status.as_deref() == Some("expired") {
            StatusCheck::Expired
        } else {
            StatusCheck::Pending
        }
    }

    /// Amount in major units, converted from cents
    pub fn amount(&self) -> Option<Decimal> {
        self.amount_total.map(|cents| Decimal::new(cents, 2))
    }

    /// "$100.00 USD" style display string
    pub fn amount_display(&self) -> Option<String> {
        let amount = self.amount()?;
        let currency = self.currency.as_deref().unwrap_or("usd").to_uppercase();
        Some(format!("${amount:.2} {currency}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn classify_paid_wins() {
        let status = SessionStatus {
            status: Some("complete".into()),
            payment_status: Some("paid".into()),
            ..Default::default()
        };
        assert_eq!(status.classify(), StatusCheck::Paid);
    }

    #[test]
    fn classify_expired_without_payment() {
        let status = SessionStatus {
            status: Some("expired".into()),
            payment_status: Some("unpaid".into()),
            ..Default::default()
        };
        assert_eq!(status.classify(), StatusCheck::Expired);
    }

    #[test]
    fn classify_defaults_to_pending() {
        assert_eq!(SessionStatus::default().classify(), StatusCheck::Pending);

        let unpaid = SessionStatus {
            status: Some("open".into()),
            payment_status: Some("unpaid".into()),
            ..Default::default()
        };
        assert_eq!(unpaid.classify(), StatusCheck::Pending);
    }

    #[test]
    fn sparse_body_deserializes() {
        let status: SessionStatus = serde_json::from_str(r#"{"payment_status":"unpaid"}"#).unwrap();
        assert_eq!(status.payment_status.as_deref(), Some("unpaid"));
        assert_eq!(status.amount_total, None);
        assert_eq!(status.metadata, SessionMetadata::default());
    }

    #[test]
    fn amount_converts_minor_units() {
        let status = SessionStatus {
            amount_total: Some(10000),
            currency: Some("usd".into()),
            ..Default::default()
        };
        assert_eq!(status.amount(), Some(dec!(100.00)));
        assert_eq!(status.amount_display().as_deref(), Some("$100.00 USD"));
    }

    #[test]
    fn custom_amount_survives_json_round_trip_as_number() {
        let request = CreateSessionRequest {
            plan_type: Plan::Custom,
            customer_email: "a@b.com".into(),
            custom_amount: Some(dec!(37.50)),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["plan_type"], "custom");
        assert!(json["custom_amount"].is_number());
    }
}
