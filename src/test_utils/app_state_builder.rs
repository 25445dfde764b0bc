//! Test app state builder for HTTP-level integration testing.
//!
//! `TestAppStateBuilder` creates an `AppState` backed by the in-memory
//! waitlist store for testing HTTP endpoints.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistStore,
    use_cases::waitlist::{LookupKey, WaitlistUseCases},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let existing = create_test_entry(|e| e.email = "ada@x.com".to_string());
///
/// let (app_state, store) = TestAppStateBuilder::new()
///     .with_entry(existing)
///     .with_normalized_dedupe(true)
///     .build_with_store();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    dedupe_on_normalized_email: bool,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            dedupe_on_normalized_email: false,
        }
    }

    /// Seed the store with an existing entry.
    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Use the normalized email for the duplicate check.
    pub fn with_normalized_dedupe(mut self, enabled: bool) -> Self {
        self.dedupe_on_normalized_email = enabled;
        self
    }

    /// Build the AppState and return the store for test assertions.
    pub fn build_with_store(self) -> (AppState, Arc<InMemoryWaitlistStore>) {
        let store = Arc::new(InMemoryWaitlistStore::with_entries(self.entries));

        let waitlist_use_cases = Arc::new(WaitlistUseCases::new(
            store.clone(),
            LookupKey::from_flag(self.dedupe_on_normalized_email),
        ));

        // Create minimal config for testing
        let config = Arc::new(AppConfig {
            bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
            database_url: SecretString::new("postgres://test".into()),
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            db_max_connections: 1,
            db_acquire_timeout_secs: 1,
            dedupe_on_normalized_email: self.dedupe_on_normalized_email,
        });

        let app_state = AppState {
            config,
            waitlist_use_cases,
        };

        (app_state, store)
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
