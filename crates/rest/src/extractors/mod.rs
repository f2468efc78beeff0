//! Axum extractors for Roster requests.
//!
//! - [`CoworkerPayload`] - Extract and validate a coworker creation body
//! - [`ListParams`] - Extract and validate list/search query parameters

mod coworker_payload;
mod list_params;

pub use coworker_payload::CoworkerPayload;
pub use list_params::ListParams;
