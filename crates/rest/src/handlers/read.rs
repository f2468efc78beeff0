//! Read interaction handler.
//!
//! `GET /coworkers/{id}`

use axum::{
    Json,
    extract::{Path, State},
};
use bson::oid::ObjectId;
use roster_persistence::core::CoworkerStorage;
use roster_persistence::error::ValidationError;
use roster_persistence::mapper::from_storage;
use roster_persistence::types::Coworker;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for reading a single coworker by identifier.
///
/// # HTTP Request
///
/// `GET /coworkers/{id}`
///
/// # Response
///
/// - `200 OK` - The coworker
/// - `400 Bad Request` - `id` is not a valid identifier
/// - `404 Not Found` - No coworker has that identifier
pub async fn read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Json<Coworker>>
where
    S: CoworkerStorage + Send + Sync,
{
    debug!(id = %id, "Processing read request");

    let oid = ObjectId::parse_str(&id).map_err(|_| ValidationError::InvalidId { id: id.clone() })?;

    match state.storage().find_by_id(&oid).await? {
        Some(document) => Ok(Json(from_storage(document)?)),
        None => Err(RestError::NotFound { id }),
    }
}
