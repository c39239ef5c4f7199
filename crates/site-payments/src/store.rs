//! Payment Transaction Bookkeeping
//!
//! Every created session gets a transaction record; the status endpoint and
//! the webhook keep it current. Storage sits behind a trait with an
//! in-memory implementation for development.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::checkout::SessionSpec;
use crate::error::Result;

/// One checkout attempt as seen by this site
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentTransaction {
    /// Internal record id
    pub id: uuid::Uuid,

    /// Stripe session id
    pub session_id: String,

    /// Chargeable amount in major units
    pub amount: Decimal,

    /// ISO currency code, lowercase
    pub currency: String,

    /// Plan code
    pub plan_type: String,

    /// Display plan name at time of purchase
    pub plan_name: String,

    /// Customer email, if supplied
    pub customer_email: Option<String>,

    /// Last observed payment state ("pending" until the provider says more)
    pub payment_status: String,

    /// Last observed session state ("initiated" until the provider says more)
    pub status: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl PaymentTransaction {
    /// Record a freshly created session
    pub fn new(session_id: impl Into<String>, spec: &SessionSpec) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4(),
            session_id: session_id.into(),
            amount: spec.amount,
            currency: "usd".into(),
            plan_type: spec.plan.code().into(),
            plan_name: spec.plan_name.clone(),
            customer_email: spec.customer_email.clone(),
            payment_status: "pending".into(),
            status: "initiated".into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Transaction storage trait
pub trait TransactionStore: Send + Sync {
    /// Save or replace a transaction
    fn save(&self, transaction: &PaymentTransaction) -> Result<()>;

    /// Get transaction by session id
    fn get(&self, session_id: &str) -> Result<Option<PaymentTransaction>>;

    /// Update the observed states of an existing transaction. Unknown
    /// session ids are ignored; the provider is authoritative either way.
    fn update_status(
        &self,
        session_id: &str,
        status: Option<&str>,
        payment_status: Option<&str>,
    ) -> Result<()>;
}

/// In-memory transaction store (for development)
pub struct MemoryTransactionStore {
    transactions: RwLock<HashMap<String, PaymentTransaction>>,
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self {
            transactions: RwLock::new(HashMap::new()),
        }
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn save(&self, transaction: &PaymentTransaction) -> Result<()> {
        let mut transactions = self.transactions.write().unwrap();
        transactions.insert(transaction.session_id.clone(), transaction.clone());
        Ok(())
    }

    fn get(&self, session_id: &str) -> Result<Option<PaymentTransaction>> {
        let transactions = self.transactions.read().unwrap();
        Ok(transactions.get(session_id).cloned())
    }

    fn update_status(
        &self,
        session_id: &str,
        status: Option<&str>,
        payment_status: Option<&str>,
    ) -> Result<()> {
        let mut transactions = self.transactions.write().unwrap();

        if let Some(transaction) = transactions.get_mut(session_id) {
            if let Some(status) = status {
                transaction.status = status.to_string();
            }
            if let Some(payment_status) = payment_status {
                transaction.payment_status = payment_status.to_string();
            }
            transaction.updated_at = Utc::now();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn spec() -> SessionSpec {
        SessionSpec::resolve("silver", None, Some("test@example.com".into())).unwrap()
    }

    #[test]
    fn new_transaction_starts_pending() {
        let transaction = PaymentTransaction::new("cs_test_1", &spec());
        assert_eq!(transaction.payment_status, "pending");
        assert_eq!(transaction.status, "initiated");
        assert_eq!(transaction.amount, dec!(100));
    }

    #[test]
    fn save_and_update() {
        let store = MemoryTransactionStore::new();
        store
            .save(&PaymentTransaction::new("cs_test_1", &spec()))
            .unwrap();

        store
            .update_status("cs_test_1", Some("complete"), Some("paid"))
            .unwrap();

        let transaction = store.get("cs_test_1").unwrap().unwrap();
        assert_eq!(transaction.status, "complete");
        assert_eq!(transaction.payment_status, "paid");
    }

    #[test]
    fn update_of_unknown_session_is_a_no_op() {
        let store = MemoryTransactionStore::new();
        store.update_status("cs_missing", Some("expired"), None).unwrap();
        assert!(store.get("cs_missing").unwrap().is_none());
    }
}
