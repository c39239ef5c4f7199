//! Contact Form Storage
//!
//! Stores contact submissions behind a trait with an in-memory
//! implementation for development.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use thiserror::Error;

/// Contact store errors
#[derive(Error, Debug)]
pub enum ContactError {
    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),
}

/// A stored contact submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactForm {
    /// Record id
    pub id: uuid::Uuid,

    pub name: String,
    pub email: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// Service the visitor is interested in
    pub service: String,

    pub message: String,

    /// Submission timestamp
    pub created_at: DateTime<Utc>,
}

impl ContactForm {
    /// Create a new record from form fields
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<String>,
        service: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: phone.filter(|p| !p.trim().is_empty()),
            service: service.into(),
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Contact storage trait
pub trait ContactStore: Send + Sync {
    /// Save a submission
    fn save(&self, form: &ContactForm) -> Result<(), ContactError>;

    /// All submissions, oldest first
    fn list(&self) -> Result<Vec<ContactForm>, ContactError>;
}

/// In-memory contact store (for development)
pub struct MemoryContactStore {
    forms: RwLock<Vec<ContactForm>>,
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self {
            forms: RwLock::new(Vec::new()),
        }
    }
}

impl ContactStore for MemoryContactStore {
    fn save(&self, form: &ContactForm) -> Result<(), ContactError> {
        let mut forms = self.forms.write().unwrap();
        forms.push(form.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<ContactForm>, ContactError> {
        let forms = self.forms.read().unwrap();
        Ok(forms.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_list() {
        let store = MemoryContactStore::new();
        store
            .save(&ContactForm::new(
                "Priya Sharma",
                "priya@example.com",
                None,
                "SEO Optimization",
                "Please get in touch.",
            ))
            .unwrap();

        let forms = store.list().unwrap();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].name, "Priya Sharma");
    }

    #[test]
    fn blank_phone_is_dropped() {
        let form = ContactForm::new("A", "a@b.com", Some("  ".into()), "Web Design", "hi");
        assert_eq!(form.phone, None);
    }
}
