//! Core types for the persistence layer.
//!
//! - [`Coworker`], [`NewCoworker`], [`CoworkerDraft`] - coworker records
//! - [`CoworkerQuery`], [`CoworkerMatcher`] - list/search queries

mod coworker;
mod query;

pub use coworker::{Coworker, CoworkerDraft, NewCoworker};
pub use query::{
    CoworkerMatcher, CoworkerQuery, DEFAULT_LIMIT, DEFAULT_SORT_FIELD, MAX_LIMIT, MIN_LIMIT,
    SEARCH_FIELDS,
};
