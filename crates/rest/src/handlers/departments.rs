//! Distinct departments handler.
//!
//! `GET /departments`

use axum::{Json, extract::State};
use bson::Bson;
use roster_persistence::core::CoworkerStorage;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::RestResult;
use crate::state::AppState;

/// Response body for the departments endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentList {
    /// Distinct department names, in store order.
    pub departments: Vec<String>,
}

/// Handler returning every distinct department value.
///
/// Values that are not strings are skipped.
///
/// # HTTP Request
///
/// `GET /departments`
///
/// # Response
///
/// - `200 OK` - `{"departments": ["R&D", "Sales", ...]}`
pub async fn departments_handler<S>(
    State(state): State<AppState<S>>,
) -> RestResult<Json<DepartmentList>>
where
    S: CoworkerStorage + Send + Sync,
{
    debug!("Processing departments request");

    let values = state.storage().distinct("department").await?;
    let departments = values
        .into_iter()
        .filter_map(|value| match value {
            Bson::String(department) => Some(department),
            other => {
                warn!(value = %other, "Skipping non-string department value");
                None
            }
        })
        .collect();

    Ok(Json(DepartmentList { departments }))
}
