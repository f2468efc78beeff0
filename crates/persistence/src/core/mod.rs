//! Core storage traits and abstractions.
//!
//! - [`BackendKind`] - Identifies a storage backend
//! - [`CoworkerStorage`] - Document store operations over the coworker collection

mod backend;
mod storage;

pub use backend::BackendKind;
pub use storage::CoworkerStorage;
