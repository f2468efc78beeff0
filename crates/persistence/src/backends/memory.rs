//! In-memory backend implementation.
//!
//! Keeps documents in a vector behind a read/write lock and evaluates
//! [`CoworkerQuery`] filters in-process with the same semantics the MongoDB
//! backend gets from the server: case-insensitive literal substring search,
//! exact department match, stable ascending sort on an arbitrary field, and
//! a result limit.

use std::cmp::Ordering;

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};
use parking_lot::RwLock;
use tracing::debug;

use crate::core::{BackendKind, CoworkerStorage};
use crate::error::{BackendError, StorageResult};
use crate::mapper::{self, ID_FIELD};
use crate::types::CoworkerQuery;

const DEFAULT_COLLECTION: &str = "coworkers";

/// Coworker storage held entirely in process memory.
///
/// Useful for tests and local development; contents are lost on drop.
#[derive(Debug)]
pub struct MemoryBackend {
    collection: String,
    documents: RwLock<Vec<Document>>,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::with_collection(DEFAULT_COLLECTION)
    }
}

impl MemoryBackend {
    /// Creates an empty backend holding the `coworkers` collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty backend that reports `collection` as its only
    /// collection.
    pub fn with_collection(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    fn internal(message: impl Into<String>) -> BackendError {
        BackendError::Internal {
            backend_name: BackendKind::Memory.to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl CoworkerStorage for MemoryBackend {
    fn backend_kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    async fn ping(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn collections(&self) -> StorageResult<Vec<String>> {
        Ok(vec![self.collection.clone()])
    }

    async fn insert(&self, document: Document) -> StorageResult<Document> {
        let mut documents = self.documents.write();

        let stored = match document.get(ID_FIELD) {
            Some(existing) => {
                if documents.iter().any(|d| d.get(ID_FIELD) == Some(existing)) {
                    return Err(Self::internal(format!("duplicate key: {}", existing)).into());
                }
                document
            }
            None => mapper::with_id(&document, ObjectId::new()),
        };

        documents.push(stored.clone());
        debug!(count = documents.len(), "Inserted document into memory backend");
        Ok(stored)
    }

    async fn find(&self, query: &CoworkerQuery) -> StorageResult<Vec<Document>> {
        let matcher = query
            .matcher()
            .map_err(|e| Self::internal(format!("invalid search pattern: {}", e)))?;

        let mut matched: Vec<Document> = self
            .documents
            .read()
            .iter()
            .filter(|document| matcher.matches(document))
            .cloned()
            .collect();

        let sort_by = query.sort_by();
        matched.sort_by(|a, b| compare_values(a.get(sort_by), b.get(sort_by)));
        matched.truncate(query.limit() as usize);

        Ok(matched)
    }

    async fn find_by_id(&self, id: &ObjectId) -> StorageResult<Option<Document>> {
        let target = Bson::ObjectId(*id);
        Ok(self
            .documents
            .read()
            .iter()
            .find(|document| document.get(ID_FIELD) == Some(&target))
            .cloned())
    }

    async fn distinct(&self, field: &str) -> StorageResult<Vec<Bson>> {
        let mut values: Vec<Bson> = Vec::new();
        for value in self.documents.read().iter().filter_map(|d| d.get(field)) {
            if !values.contains(value) {
                values.push(value.clone());
            }
        }
        Ok(values)
    }
}

/// Orders two field values the way an ascending MongoDB sort does for the
/// types coworker documents hold: missing/null first, then numbers, then
/// strings (byte-wise), then object ids.
fn compare_values(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    match (a, b) {
        (Some(Bson::String(x)), Some(Bson::String(y))) => x.cmp(y),
        (Some(Bson::ObjectId(x)), Some(Bson::ObjectId(y))) => x.cmp(y),
        (Some(x), Some(y)) => match (as_number(x), as_number(y)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => type_rank(a).cmp(&type_rank(b)),
        },
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn as_number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Double(v) => Some(*v),
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        _ => None,
    }
}

fn type_rank(value: Option<&Bson>) -> u8 {
    match value {
        None | Some(Bson::Null) => 0,
        Some(Bson::Double(_) | Bson::Int32(_) | Bson::Int64(_)) => 1,
        Some(Bson::String(_)) => 2,
        Some(Bson::ObjectId(_)) => 3,
        Some(_) => 4,
    }
}
