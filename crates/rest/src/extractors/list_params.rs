//! List/search parameter extractor.
//!
//! Extracts `search`, `department`, `sort_by` and `limit` from the query
//! string and validates them into a [`CoworkerQuery`] before the handler
//! runs, so an invalid request never reaches the store.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use roster_persistence::error::ValidationError;
use roster_persistence::types::CoworkerQuery;
use serde::Deserialize;

use crate::error::RestError;

/// Axum extractor for a validated list/search query.
///
/// # Example
///
/// ```rust,ignore
/// use roster_rest::extractors::ListParams;
///
/// async fn list_handler(ListParams(query): ListParams) {
///     println!("limit = {}", query.limit());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ListParams(pub CoworkerQuery);

/// Query string parameters as received.
#[derive(Debug, Default, Deserialize)]
struct RawListParams {
    search: Option<String>,
    department: Option<String>,
    sort_by: Option<String>,
    limit: Option<String>,
}

impl RawListParams {
    fn into_query(self) -> Result<CoworkerQuery, ValidationError> {
        let limit = match self.limit.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                ValidationError::InvalidParameter {
                    parameter: "limit".to_string(),
                    message: format!("'{}' is not an integer", raw),
                }
            })?),
        };

        CoworkerQuery::new(self.search, self.department, self.sort_by, limit)
    }
}

impl ListParams {
    /// Consumes the extractor and returns the query.
    pub fn into_inner(self) -> CoworkerQuery {
        self.0
    }
}

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<RawListParams>::from_request_parts(parts, state).await?;
        Ok(ListParams(raw.into_query()?))
    }
}
