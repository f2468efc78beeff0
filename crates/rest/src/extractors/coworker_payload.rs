//! Coworker creation payload extractor.
//!
//! Parses the JSON body into a [`CoworkerDraft`] and validates it, so
//! handlers only ever see a [`NewCoworker`].

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use roster_persistence::types::{CoworkerDraft, NewCoworker};

use crate::error::RestError;

/// Axum extractor for a validated coworker creation payload.
///
/// # Example
///
/// ```rust,ignore
/// use roster_rest::extractors::CoworkerPayload;
///
/// async fn create_handler(CoworkerPayload(coworker): CoworkerPayload) {
///     assert!(coworker.salary > 0.0);
/// }
/// ```
#[derive(Debug)]
pub struct CoworkerPayload(pub NewCoworker);

impl CoworkerPayload {
    /// Consumes the extractor and returns the validated coworker.
    pub fn into_inner(self) -> NewCoworker {
        self.0
    }
}

impl<S> FromRequest<S> for CoworkerPayload
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(draft) = Json::<CoworkerDraft>::from_request(req, state).await?;
        Ok(CoworkerPayload(draft.validate()?))
    }
}
