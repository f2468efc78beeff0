//! # roster-rest - Coworker directory HTTP API
//!
//! This crate exposes a small JSON API over a document store holding
//! coworker records: create a coworker, list and search them, and list the
//! departments in use.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster_persistence::backends::mongodb::MongoBackend;
//! use roster_rest::{ServerConfig, create_app_with_config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = MongoBackend::from_connection_string("mongodb://localhost:27017").await?;
//!     let app = create_app_with_config(backend, ServerConfig::default());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | create | POST | `/coworkers` |
//! | list/search | GET | `/coworkers?search=&department=&sort_by=&limit=` |
//! | read | GET | `/coworkers/{id}` |
//! | departments | GET | `/departments` |
//! | health | GET | `/health` |
//! | database check | GET | `/db-check` |
//!
//! ## Error Handling
//!
//! Errors are returned as `{"error": {"status", "kind", "message"}}`; see
//! [`error`] for the status mapping.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their HTTP mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`extractors`] - Query string and body extractors
//! - [`routing`] - Route configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use roster_persistence::core::CoworkerStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: CoworkerStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// # Example
///
/// ```rust
/// use roster_persistence::backends::memory::MemoryBackend;
/// use roster_rest::{ServerConfig, create_app_with_config};
///
/// let app = create_app_with_config(MemoryBackend::new(), ServerConfig::for_testing());
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: CoworkerStorage + Send + Sync + 'static,
{
    info!(
        "Creating Roster API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(Arc::new(storage), config.clone());
    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
///
/// Credentials are allowed, so origins are always an explicit list and
/// methods and headers echo the preflight request.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.cors_origins())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "roster={level},roster_rest={level},roster_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
