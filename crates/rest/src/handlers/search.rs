//! List/search interaction handler.
//!
//! `GET /coworkers?search=&department=&sort_by=&limit=`

use axum::{Json, extract::State};
use roster_persistence::core::CoworkerStorage;
use roster_persistence::mapper::from_storage;
use roster_persistence::types::Coworker;
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::ListParams;
use crate::state::AppState;

/// Handler for listing and searching coworkers.
///
/// # HTTP Request
///
/// `GET /coworkers`
///
/// # Query Parameters
///
/// - `search` - Case-insensitive substring of name, role or department
/// - `department` - Exact, case-sensitive department
/// - `sort_by` - Field to sort ascending by (default `name`)
/// - `limit` - Maximum results, 1 to 100 (default 10)
///
/// # Response
///
/// - `200 OK` - JSON array of coworkers, possibly empty
/// - `400 Bad Request` - `limit` out of range or not an integer
pub async fn list_handler<S>(
    State(state): State<AppState<S>>,
    ListParams(query): ListParams,
) -> RestResult<Json<Vec<Coworker>>>
where
    S: CoworkerStorage + Send + Sync,
{
    debug!(
        search = ?query.search(),
        department = ?query.department(),
        sort_by = %query.sort_by(),
        limit = query.limit(),
        "Processing list request"
    );

    let documents = state.storage().find(&query).await?;
    let coworkers = documents
        .into_iter()
        .map(from_storage)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = coworkers.len(), "List completed");

    Ok(Json(coworkers))
}
