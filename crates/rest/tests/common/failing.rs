//! A storage backend whose every operation fails.

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};
use roster_persistence::core::{BackendKind, CoworkerStorage};
use roster_persistence::error::BackendError;
use roster_persistence::types::CoworkerQuery;
use roster_persistence::{StorageError, StorageResult};

/// Secret-looking detail that must never reach a response body.
pub const FAILURE_DETAIL: &str = "connection refused to mongodb://admin:hunter2@db:27017";

/// How [`FailingStorage`] fails.
#[derive(Debug, Clone, Copy)]
pub enum Outage {
    /// The store cannot be reached.
    Unavailable,
    /// The store answers with an error.
    Internal,
}

/// Storage that fails every call with the configured [`Outage`].
#[derive(Debug)]
pub struct FailingStorage {
    outage: Outage,
}

impl FailingStorage {
    /// Creates a backend that fails with `outage`.
    pub fn new(outage: Outage) -> Self {
        Self { outage }
    }

    fn fail<T>(&self) -> StorageResult<T> {
        let backend_name = BackendKind::MongoDB.to_string();
        let message = FAILURE_DETAIL.to_string();
        let error = match self.outage {
            Outage::Unavailable => BackendError::Unavailable {
                backend_name,
                message,
            },
            Outage::Internal => BackendError::Internal {
                backend_name,
                message,
            },
        };
        Err(StorageError::Backend(error))
    }
}

#[async_trait]
impl CoworkerStorage for FailingStorage {
    fn backend_kind(&self) -> BackendKind {
        BackendKind::MongoDB
    }

    async fn ping(&self) -> StorageResult<()> {
        self.fail()
    }

    async fn collections(&self) -> StorageResult<Vec<String>> {
        self.fail()
    }

    async fn insert(&self, _document: Document) -> StorageResult<Document> {
        self.fail()
    }

    async fn find(&self, _query: &CoworkerQuery) -> StorageResult<Vec<Document>> {
        self.fail()
    }

    async fn find_by_id(&self, _id: &ObjectId) -> StorageResult<Option<Document>> {
        self.fail()
    }

    async fn distinct(&self, _field: &str) -> StorageResult<Vec<Bson>> {
        self.fail()
    }
}
