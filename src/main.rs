//! eduhub API server.
//!
//! A CRUD REST backend for an educational/content platform: persons, posts,
//! items, assignatures, institutions, courses, tags and file storage, with
//! pagination, filtering, soft delete and password credentials.
//!
//! # Architecture
//!
//! Layered request flow:
//!
//! 1. **Router** routes to a controller and applies CORS/trace layers
//! 2. **Controller** (`controller/`) extracts input, runs validators, shapes
//!    the response envelope
//! 3. **Validator** (`validator/`) checks field-level rules before any
//!    persistence
//! 4. **Service** (`service/`) runs business logic: conflict pre-checks, the
//!    soft-delete state machine, credentials, reference resolution
//! 5. **Data** (`data/`) performs SeaORM queries against the `entity` models
//!
//! Supporting modules: `config` (env), `state` (shared AppState), `startup`
//! (connect + migrate), `error` (AppError → envelope), `util` (JWT helpers).

mod config;
mod controller;
mod data;
mod error;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;
mod validator;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Configuration error: {}", err);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("Failed to initialize database: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = tokio::fs::create_dir_all(&config.storage_path).await {
        tracing::error!(
            "Failed to create storage directory {}: {}",
            config.storage_path,
            err
        );
        std::process::exit(1);
    }

    let port = config.port;
    let state = AppState::new(db, &config);
    let app = router::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    tracing::info!("Server is running on port {}", port);

    if let Err(err) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!("Server error: {}", err);
        std::process::exit(1);
    }
}
