//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned per request through Axum's
//! state extraction. All fields are cheap to clone: the database connection
//! is a pool handle, the rate limiter shares its store through an `Arc`.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::config::Config;
use crate::service::rate_limit::RegistrationRateLimiter;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Public base URL for generated file links, with a trailing slash.
    pub public_url: String,

    /// On-disk directory for uploaded files.
    pub storage_path: PathBuf,

    /// Injected registration attempt limiter (person creation).
    pub registration_limiter: RegistrationRateLimiter,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            public_url: config.public_url.clone(),
            storage_path: PathBuf::from(&config.storage_path),
            registration_limiter: RegistrationRateLimiter::new(),
        }
    }
}
