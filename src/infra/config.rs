use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Postgres connection string. Holds credentials, so never log it.
    pub database_url: SecretString,
    /// Origin of the marketing site allowed to call the API.
    pub cors_origin: HeaderValue,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    /// Compare the normalized email in the duplicate check instead of the
    /// raw submitted value.
    pub dedupe_on_normalized_email: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let database_url = SecretString::new(get_env::<String>("DATABASE_URL").into());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        let db_acquire_timeout_secs: u64 = get_env_default("DB_ACQUIRE_TIMEOUT_SECS", 5);
        let dedupe_on_normalized_email: bool = get_env_default("DEDUPE_ON_NORMALIZED_EMAIL", false);

        Self {
            bind_addr,
            database_url,
            cors_origin,
            db_max_connections,
            db_acquire_timeout_secs,
            dedupe_on_normalized_email,
        }
    }
}
