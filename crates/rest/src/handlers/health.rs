//! Health check endpoint handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use roster_persistence::core::CoworkerStorage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `healthy` when the server answers.
    pub status: String,
    /// Crate version of the running server.
    pub version: String,
    /// Storage backend name (`mongodb` or `memory`).
    pub backend: String,
    /// Database the coworker collection lives in.
    pub database: String,
    /// Name of the coworker collection.
    pub collection: String,
    /// Time the check was answered.
    pub timestamp: DateTime<Utc>,
}

/// Body of a successful `GET /db-check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseCheck {
    /// Always `connected` on success.
    pub status: String,
    /// Storage backend name.
    pub backend: String,
    /// Collections visible in the configured database.
    pub collections: Vec<String>,
}

/// Handler for the health check endpoint.
///
/// Reports which store the server is configured against without touching
/// it; use `/db-check` to test connectivity.
///
/// # HTTP Request
///
/// `GET /health`
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Json<HealthStatus>
where
    S: CoworkerStorage + Send + Sync,
{
    debug!("Processing health check request");

    let config = state.config();
    Json(HealthStatus {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend: state.storage().backend_name().to_string(),
        database: config.database.clone(),
        collection: config.collection.clone(),
        timestamp: Utc::now(),
    })
}

/// Handler for the liveness check.
///
/// # HTTP Request
///
/// `GET /_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler checking the document store connection.
///
/// Lists the collections of the configured database, which needs a live
/// server round trip.
///
/// # HTTP Request
///
/// `GET /db-check`
///
/// # Response
///
/// - `200 OK` - `{"status": "connected", "backend": "...", "collections": [...]}`
/// - `503 Service Unavailable` - The store could not be reached
pub async fn db_check_handler<S>(State(state): State<AppState<S>>) -> RestResult<Json<DatabaseCheck>>
where
    S: CoworkerStorage + Send + Sync,
{
    debug!("Processing database check request");

    let collections = state.storage().collections().await?;
    debug!(count = collections.len(), "Database check succeeded");

    Ok(Json(DatabaseCheck {
        status: "connected".to_string(),
        backend: state.storage().backend_name().to_string(),
        collections,
    }))
}
