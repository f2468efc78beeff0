//! Coworker document store trait.
//!
//! This module defines the [`CoworkerStorage`] trait, the narrow interface the
//! REST layer uses to reach the document store. It works on raw BSON
//! documents; converting them to and from coworker records is the job of
//! [`crate::mapper`].

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};

use crate::core::BackendKind;
use crate::error::StorageResult;
use crate::types::CoworkerQuery;

/// Document store operations over the coworker collection.
///
/// Implementations must be safe to share between concurrent requests; the
/// server holds a single instance behind an `Arc` for the lifetime of the
/// process.
///
/// # Example
///
/// ```ignore
/// use roster_persistence::core::CoworkerStorage;
/// use roster_persistence::mapper::{from_storage, to_storage};
/// use roster_persistence::types::{CoworkerQuery, NewCoworker};
///
/// async fn example<S: CoworkerStorage>(storage: &S) -> anyhow::Result<()> {
///     let bob = NewCoworker {
///         name: "Bob".to_string(),
///         role: "Engineer".to_string(),
///         department: "R&D".to_string(),
///         salary: 50000.0,
///     };
///
///     let stored = storage.insert(to_storage(&bob)).await?;
///     let coworker = from_storage(stored)?;
///     println!("Created {}", coworker.id);
///
///     let found = storage.find(&CoworkerQuery::default()).await?;
///     assert!(!found.is_empty());
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait CoworkerStorage: Send + Sync {
    /// Returns the kind of backend.
    fn backend_kind(&self) -> BackendKind;

    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str {
        self.backend_kind().as_str()
    }

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend(Unavailable)` - the store cannot be reached
    async fn ping(&self) -> StorageResult<()>;

    /// Lists the collection names in the configured database.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend(Unavailable)` - the store cannot be reached
    async fn collections(&self) -> StorageResult<Vec<String>>;

    /// Inserts a document and returns it with its assigned `_id`.
    ///
    /// The document must not carry an `_id`; the store generates one.
    async fn insert(&self, document: Document) -> StorageResult<Document>;

    /// Returns the documents matching the query's filter, ordered by its sort
    /// key and truncated to its limit.
    async fn find(&self, query: &CoworkerQuery) -> StorageResult<Vec<Document>>;

    /// Reads a document by its identifier.
    ///
    /// Returns `Ok(None)` if no document has that identifier.
    async fn find_by_id(&self, id: &ObjectId) -> StorageResult<Option<Document>>;

    /// Returns the distinct values of `field` across the collection.
    ///
    /// The order of the returned values is backend-dependent.
    async fn distinct(&self, field: &str) -> StorageResult<Vec<Bson>>;
}
