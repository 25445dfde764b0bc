use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A persisted waitlist signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A signup that has not been written yet.
///
/// `email` is normalized and `name` trimmed; `submitted_email` keeps the raw
/// value exactly as it arrived so the duplicate check can use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub name: String,
    pub email: String,
    pub submitted_email: String,
}

impl NewWaitlistEntry {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: normalize_email(email),
            submitted_email: email.to_string(),
        }
    }

    /// Stamp the entry for insertion.
    pub fn into_entry(self, now: DateTime<Utc>) -> WaitlistEntry {
        WaitlistEntry {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            created_at: now,
        }
    }
}

/// Trimmed, lower-cased form used for storage.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
