//! Stripe Checkout Integration
//!
//! Implements the "Stripe Checkout (Hosted)" approach: the backend creates a
//! one-time-payment session and the customer is redirected to Stripe's
//! hosted page, then back to `/checkout/success` or `/checkout/cancel`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionId, CheckoutSessionMode,
    CheckoutSessionPaymentStatus, CheckoutSessionStatus, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData, Currency,
};

use site_core::{Plan, SessionMetadata, SessionStatus};

use crate::error::{PaymentError, Result};

/// Stripe client wrapper
pub struct StripeClient {
    client: Client,
    webhook_secret: String,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str, webhook_secret: &str) -> Self {
        Self {
            client: Client::new(secret_key),
            webhook_secret: webhook_secret.to_string(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY not set".into()))?;
        let webhook_secret = std::env::var("STRIPE_WEBHOOK_SECRET")
            .map_err(|_| PaymentError::Config("STRIPE_WEBHOOK_SECRET not set".into()))?;

        Ok(Self::new(&secret_key, &webhook_secret))
    }

    /// Get the webhook secret
    pub fn webhook_secret(&self) -> &str {
        &self.webhook_secret
    }

    /// Create a hosted Checkout session for one order.
    ///
    /// `public_url` is the externally visible site origin; Stripe substitutes
    /// the `{CHECKOUT_SESSION_ID}` placeholder on redirect-back.
    pub async fn create_order_session(
        &self,
        spec: &SessionSpec,
        public_url: &str,
    ) -> Result<CreatedSession> {
        let success_url =
            format!("{public_url}/checkout/success?session_id={{CHECKOUT_SESSION_ID}}");
        let cancel_url = format!("{public_url}/checkout/cancel");

        let mut params = CreateCheckoutSession::new();
        params.success_url = Some(&success_url);
        params.cancel_url = Some(&cancel_url);
        params.mode = Some(CheckoutSessionMode::Payment);
        if let Some(ref email) = spec.customer_email {
            params.customer_email = Some(email);
        }

        // Metadata the status endpoint echoes back to the success page
        let mut metadata = HashMap::new();
        metadata.insert("plan_type".to_string(), spec.plan.code().to_string());
        metadata.insert("plan_name".to_string(), spec.plan_name.clone());
        metadata.insert(
            "customer_email".to_string(),
            spec.customer_email.clone().unwrap_or_default(),
        );
        params.metadata = Some(metadata);

        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(1),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency: Currency::USD,
                unit_amount: Some(spec.amount_minor()?),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: spec.plan_name.clone(),
                    description: Some(spec.plan.details().summary.to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        let url = session
            .url
            .ok_or_else(|| PaymentError::Stripe("No checkout URL returned".into()))?;

        Ok(CreatedSession {
            id: session.id.to_string(),
            url,
        })
    }

    /// Retrieve the authoritative payment status of one session
    pub async fn fetch_status(&self, session_id: &str) -> Result<SessionStatus> {
        let id: CheckoutSessionId = session_id
            .parse()
            .map_err(|_| PaymentError::Stripe(format!("invalid session id: {session_id}")))?;

        let session = StripeCheckoutSession::retrieve(&self.client, &id, &[])
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        let metadata = session.metadata.unwrap_or_default();

        Ok(SessionStatus {
            status: session.status.map(|s| {
                match s {
                    CheckoutSessionStatus::Open => "open",
                    CheckoutSessionStatus::Complete => "complete",
                    CheckoutSessionStatus::Expired => "expired",
                }
                .to_string()
            }),
            payment_status: Some(
                match session.payment_status {
                    CheckoutSessionPaymentStatus::Paid => "paid",
                    CheckoutSessionPaymentStatus::Unpaid => "unpaid",
                    CheckoutSessionPaymentStatus::NoPaymentRequired => "no_payment_required",
                }
                .to_string(),
            ),
            amount_total: session.amount_total,
            currency: session.currency.map(|c| c.to_string()),
            metadata: SessionMetadata {
                plan_type: metadata.get("plan_type").cloned(),
                plan_name: metadata.get("plan_name").cloned(),
                customer_email: metadata.get("customer_email").cloned(),
            },
        })
    }

    /// Get the underlying Stripe client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Server-side resolution of one session request: the chargeable amount
/// comes from the catalog (or the validated custom amount), never from the
/// client.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSpec {
    /// Plan being purchased
    pub plan: Plan,

    /// Chargeable amount in major units
    pub amount: Decimal,

    /// Product name shown on the hosted page and echoed in metadata
    pub plan_name: String,

    /// Customer email, if supplied
    pub customer_email: Option<String>,
}

impl SessionSpec {
    /// Resolve a raw request. Unknown plan codes and missing/non-positive
    /// custom amounts are request errors (HTTP 400 at the boundary).
    pub fn resolve(
        plan_type: &str,
        custom_amount: Option<Decimal>,
        customer_email: Option<String>,
    ) -> Result<Self> {
        let plan: Plan = plan_type
            .parse()
            .map_err(|_| PaymentError::InvalidPlan(plan_type.to_string()))?;
        let details = plan.details();

        let (amount, plan_name) = if details.is_custom {
            let amount = custom_amount
                .filter(|a| *a > Decimal::ZERO)
                .ok_or(PaymentError::InvalidAmount)?;
            (amount, format!("Custom Plan - ${amount}"))
        } else {
            (details.base_price, details.name.to_string())
        };

        Ok(Self {
            plan,
            amount,
            plan_name,
            customer_email: customer_email.filter(|e| !e.trim().is_empty()),
        })
    }

    /// Amount in minor currency units (cents)
    pub fn amount_minor(&self) -> Result<i64> {
        (self.amount * dec!(100))
            .round_dp(0)
            .to_i64()
            .ok_or(PaymentError::InvalidAmount)
    }
}

/// Result of creating a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatedSession {
    /// Stripe session ID
    pub id: String,

    /// Hosted payment page URL to redirect the customer to
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_plan_resolves_catalog_amount() {
        let spec = SessionSpec::resolve("silver", None, Some("a@b.com".into())).unwrap();
        assert_eq!(spec.plan, Plan::Silver);
        assert_eq!(spec.amount, dec!(100));
        assert_eq!(spec.plan_name, "Silver Plan");
        assert_eq!(spec.amount_minor().unwrap(), 10000);
    }

    #[test]
    fn custom_plan_takes_supplied_amount() {
        let spec = SessionSpec::resolve("custom", Some(dec!(37.50)), None).unwrap();
        assert_eq!(spec.amount, dec!(37.50));
        assert_eq!(spec.plan_name, "Custom Plan - $37.50");
        assert_eq!(spec.amount_minor().unwrap(), 3750);
    }

    #[test]
    fn custom_plan_ignores_catalog_for_fixed_amounts() {
        // A custom_amount on a fixed plan is ignored; catalog wins.
        let spec = SessionSpec::resolve("gold", Some(dec!(1)), None).unwrap();
        assert_eq!(spec.amount, dec!(250));
    }

    #[test]
    fn unknown_plan_is_a_request_error() {
        let err = SessionSpec::resolve("platinum", None, None).unwrap_err();
        assert!(matches!(err, PaymentError::InvalidPlan(_)));
        assert!(err.is_request_error());
    }

    #[test]
    fn custom_plan_requires_positive_amount() {
        for amount in [None, Some(Decimal::ZERO), Some(dec!(-5))] {
            let err = SessionSpec::resolve("custom", amount, None).unwrap_err();
            assert!(matches!(err, PaymentError::InvalidAmount));
        }
    }

    #[test]
    fn blank_email_is_dropped() {
        let spec = SessionSpec::resolve("bronze", None, Some("   ".into())).unwrap();
        assert_eq!(spec.customer_email, None);
    }
}
