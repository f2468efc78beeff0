//! Roster Persistence Layer
//!
//! This crate holds the coworker document model and everything needed to
//! turn API input into document-store operations:
//!
//! - [`types`] - Coworker records and the validated list/search query
//! - [`mapper`] - Conversion between coworker records and BSON documents
//! - [`core`] - The [`CoworkerStorage`](core::CoworkerStorage) trait
//! - [`backends`] - MongoDB and in-memory implementations
//! - [`error`] - Error types for validation, mapping and backend failures
//!
//! # Quick Start
//!
//! ```
//! use roster_persistence::mapper::{from_storage, to_storage};
//! use roster_persistence::types::{CoworkerDraft, CoworkerQuery};
//!
//! let draft = CoworkerDraft {
//!     name: Some("Bob".to_string()),
//!     role: Some("Engineer".to_string()),
//!     department: Some("R&D".to_string()),
//!     salary: Some(50000.0),
//! };
//! let coworker = draft.validate().unwrap();
//! let document = to_storage(&coworker);
//! assert_eq!(document.get_str("department").unwrap(), "R&D");
//!
//! let query = CoworkerQuery::new(None, Some("R&D".to_string()), None, Some(5)).unwrap();
//! assert_eq!(query.limit(), 5);
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod mapper;
pub mod types;

pub use error::{StorageError, StorageResult};
