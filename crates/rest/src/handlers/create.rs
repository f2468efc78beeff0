//! Create interaction handler.
//!
//! `POST /coworkers`

use axum::{Json, extract::State};
use roster_persistence::core::CoworkerStorage;
use roster_persistence::mapper::{from_storage, to_storage};
use roster_persistence::types::Coworker;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::CoworkerPayload;
use crate::state::AppState;

/// Handler for the create interaction.
///
/// Validates the payload, stores it, and returns the stored coworker with
/// the identifier the store assigned. Store failures are not retried.
///
/// # HTTP Request
///
/// `POST /coworkers`
///
/// # Response
///
/// - `200 OK` - Coworker created; body is the full record including `id`
/// - `400 Bad Request` - Missing field, empty name, or `salary <= 0`
/// - `500 Internal Server Error` / `503 Service Unavailable` - Store failure
///
/// # Example
///
/// ```http
/// POST /coworkers HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Bob", "role": "Engineer", "department": "R&D", "salary": 50000}
/// ```
pub async fn create_handler<S>(
    State(state): State<AppState<S>>,
    CoworkerPayload(coworker): CoworkerPayload,
) -> RestResult<Json<Coworker>>
where
    S: CoworkerStorage + Send + Sync,
{
    debug!(
        name = %coworker.name,
        department = %coworker.department,
        "Processing create request"
    );

    let stored = state.storage().insert(to_storage(&coworker)).await?;
    let created = from_storage(stored)?;

    debug!(id = %created.id, "Coworker created");

    Ok(Json(created))
}
