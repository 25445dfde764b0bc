use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::validators::{is_valid_email, is_valid_name},
    domain::entities::waitlist_entry::{NewWaitlistEntry, WaitlistEntry},
};

// ============================================================================
// Ports
// ============================================================================

/// Source of store sessions. One session is opened per registration.
#[async_trait]
pub trait WaitlistStore: Send + Sync {
    async fn open(&self) -> AppResult<Box<dyn WaitlistSession>>;
}

/// A single store connection held for the duration of one request.
///
/// Dropping the session releases the underlying connection, so callers never
/// close it explicitly.
#[async_trait]
pub trait WaitlistSession: Send {
    async fn find_by_email(&mut self, email: &str) -> AppResult<Option<WaitlistEntry>>;
    async fn insert(&mut self, entry: &WaitlistEntry) -> AppResult<()>;
}

/// Which form of the submitted email the duplicate check compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupKey {
    /// The email exactly as submitted. Entries are stored normalized, so a
    /// resubmission with different casing or padding is not caught.
    #[default]
    Submitted,
    /// The trimmed, lower-cased email, matching what is stored.
    Normalized,
}

impl LookupKey {
    pub fn from_flag(dedupe_on_normalized: bool) -> Self {
        if dedupe_on_normalized {
            LookupKey::Normalized
        } else {
            LookupKey::Submitted
        }
    }
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    store: Arc<dyn WaitlistStore>,
    lookup: LookupKey,
}

impl WaitlistUseCases {
    pub fn new(store: Arc<dyn WaitlistStore>, lookup: LookupKey) -> Self {
        Self { store, lookup }
    }

    /// Validate a signup and add it to the waitlist.
    ///
    /// The existence check and the insert are not atomic: two concurrent
    /// requests for the same email can both pass the check and both insert.
    #[instrument(skip(self, name))]
    pub async fn register(
        &self,
        name: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<WaitlistEntry> {
        let new_entry = validate_signup(name, email)?;

        let mut session = self.store.open().await?;

        let key = match self.lookup {
            LookupKey::Submitted => new_entry.submitted_email.as_str(),
            LookupKey::Normalized => new_entry.email.as_str(),
        };
        if session.find_by_email(key).await?.is_some() {
            return Err(AppError::AlreadyRegistered);
        }

        let entry = new_entry.into_entry(Utc::now());
        session.insert(&entry).await?;

        info!(entry_id = %entry.id, "Waitlist entry created");
        Ok(entry)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Both fields are required; the email needs an `@` and the name must not be
/// blank.
fn validate_signup(name: Option<&str>, email: Option<&str>) -> AppResult<NewWaitlistEntry> {
    match (name, email) {
        (Some(name), Some(email)) if is_valid_email(email) && is_valid_name(name) => {
            Ok(NewWaitlistEntry::new(name, email))
        }
        _ => Err(AppError::InvalidInput("Invalid email or name".into())),
    }
}
