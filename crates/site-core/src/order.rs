//! Order Derivation
//!
//! Builds the chargeable order from the navigation query string and the
//! customer's form input. Pure functions; no network access.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::plan::Plan;
use crate::session::CreateSessionRequest;

/// Checkout entry parameters read from the URL query string
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckoutQuery {
    /// `plan` query parameter, raw
    pub plan: Option<String>,

    /// `price` query parameter; non-numeric values are dropped
    pub price: Option<Decimal>,
}

impl CheckoutQuery {
    /// Parse from already-extracted query parameters
    pub fn new(plan: Option<String>, price: Option<String>) -> Self {
        Self {
            plan: plan.filter(|p| !p.is_empty()),
            price: price.and_then(|p| p.trim().parse().ok()),
        }
    }

    /// Resolve the plan, falling back to the catalog default
    pub fn plan(&self) -> Plan {
        Plan::resolve(self.plan.as_deref())
    }
}

/// A derived order, ready to submit. Only constructed through
/// [`Order::build`], which enforces the amount and email invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    /// Resolved plan
    pub plan: Plan,

    /// Final chargeable amount; always positive
    pub amount: Decimal,

    /// Customer email, non-empty
    pub customer_email: String,
}

impl Order {
    /// Validate inputs and derive the order. Errors here are inline form
    /// errors; nothing reaches the network.
    pub fn build(
        plan: Plan,
        url_price: Option<Decimal>,
        email: &str,
        custom_input: Option<&str>,
    ) -> Result<Order, ValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        let amount = compute_amount(plan, url_price, custom_input)?;

        Ok(Order {
            plan,
            amount,
            customer_email: email.to_string(),
        })
    }

    /// Wire request for the session-creation endpoint. The amount itself is
    /// only transmitted for custom plans; fixed plans are re-priced from the
    /// catalog on the server.
    pub fn to_request(&self) -> CreateSessionRequest {
        CreateSessionRequest {
            plan_type: self.plan,
            customer_email: self.customer_email.clone(),
            custom_amount: self.plan.details().is_custom.then_some(self.amount),
        }
    }
}

/// Final amount for a plan selection.
///
/// Custom plans require the customer-entered value: a positive decimal with
/// at most two fractional digits. Fixed plans take the URL override when one
/// was supplied, else the catalog base price.
pub fn compute_amount(
    plan: Plan,
    url_price: Option<Decimal>,
    custom_input: Option<&str>,
) -> Result<Decimal, ValidationError> {
    let details = plan.details();

    if !details.is_custom {
        return Ok(url_price.unwrap_or(details.base_price));
    }

    let raw = custom_input
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::InvalidAmount)?;
    let amount: Decimal = raw.parse().map_err(|_| ValidationError::InvalidAmount)?;

    if amount <= Decimal::ZERO || amount.scale() > 2 {
        return Err(ValidationError::InvalidAmount);
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn fixed_plan_uses_catalog_price() {
        let amount = compute_amount(Plan::Silver, None, None).unwrap();
        assert_eq!(amount, dec!(100));
    }

    #[test]
    fn url_override_beats_catalog_price() {
        let amount = compute_amount(Plan::Silver, Some(dec!(80)), None).unwrap();
        assert_eq!(amount, dec!(80));
    }

    #[test]
    fn custom_plan_takes_entered_amount() {
        let amount = compute_amount(Plan::Custom, None, Some("37.50")).unwrap();
        assert_eq!(amount, dec!(37.50));
    }

    #[test]
    fn custom_plan_rejects_bad_amounts() {
        for input in [None, Some(""), Some("   "), Some("abc"), Some("0"), Some("-5"), Some("1.999")] {
            assert_eq!(
                compute_amount(Plan::Custom, None, input),
                Err(ValidationError::InvalidAmount),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn non_numeric_url_price_is_dropped() {
        let query = CheckoutQuery::new(Some("silver".into()), Some("cheap".into()));
        assert_eq!(query.price, None);
        assert_eq!(query.plan(), Plan::Silver);
    }

    #[test]
    fn order_requires_email() {
        let err = Order::build(Plan::Bronze, None, "  ", None).unwrap_err();
        assert_eq!(err, ValidationError::MissingEmail);
    }

    #[test]
    fn email_checked_before_amount() {
        // Both fields invalid: the email error is the one reported.
        let err = Order::build(Plan::Custom, None, "", None).unwrap_err();
        assert_eq!(err, ValidationError::MissingEmail);
    }

    #[test]
    fn fixed_plan_request_omits_custom_amount() {
        let order = Order::build(Plan::Silver, None, "a@b.com", None).unwrap();
        let request = order.to_request();
        assert_eq!(request.plan_type, Plan::Silver);
        assert_eq!(request.custom_amount, None);
    }

    #[test]
    fn custom_plan_request_carries_amount() {
        let order = Order::build(Plan::Custom, None, "a@b.com", Some("37.50")).unwrap();
        assert_eq!(order.amount, dec!(37.50));
        assert_eq!(order.to_request().custom_amount, Some(dec!(37.50)));
    }
}
