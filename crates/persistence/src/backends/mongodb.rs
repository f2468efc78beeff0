//! MongoDB backend implementation.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use bson::{Bson, Document, doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{BackendKind, CoworkerStorage};
use crate::error::{BackendError, StorageError, StorageResult};
use crate::mapper::ID_FIELD;
use crate::types::CoworkerQuery;

/// MongoDB backend for coworker storage.
///
/// Wraps a driver [`Client`], which pools connections internally and is
/// safe to share across requests.
pub struct MongoBackend {
    client: Client,
    database: Database,
    collection: Collection<Document>,
    config: MongoBackendConfig,
}

impl Debug for MongoBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoBackend")
            .field("host", &redact_uri(&self.config.uri))
            .field("database", &self.config.database)
            .field("collection", &self.config.collection)
            .finish_non_exhaustive()
    }
}

/// Configuration for the MongoDB backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoBackendConfig {
    /// Connection string (`mongodb://` or `mongodb+srv://`).
    pub uri: String,

    /// Database name.
    #[serde(default = "default_database")]
    pub database: String,

    /// Collection holding coworker documents.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// How long the driver waits to find a usable server, in milliseconds.
    #[serde(default = "default_server_selection_timeout_ms")]
    pub server_selection_timeout_ms: u64,

    /// Application name reported to the server.
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

fn default_database() -> String {
    "fastapi".to_string()
}

fn default_collection() -> String {
    "coworkers".to_string()
}

fn default_server_selection_timeout_ms() -> u64 {
    30000
}

fn default_app_name() -> String {
    "roster".to_string()
}

impl MongoBackendConfig {
    /// Creates a configuration for `uri` with default names and timeouts.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: default_database(),
            collection: default_collection(),
            server_selection_timeout_ms: default_server_selection_timeout_ms(),
            app_name: default_app_name(),
        }
    }
}

impl MongoBackend {
    /// Creates a backend from a connection string using default names.
    pub async fn from_connection_string(uri: &str) -> StorageResult<Self> {
        Self::connect(MongoBackendConfig::new(uri)).await
    }

    /// Creates a backend with custom configuration.
    ///
    /// The driver connects lazily, so this only fails on an unparsable
    /// connection string. Call [`CoworkerStorage::ping`] to verify the server
    /// is reachable.
    pub async fn connect(config: MongoBackendConfig) -> StorageResult<Self> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(connection_failed)?;
        options.app_name = Some(config.app_name.clone());
        options.server_selection_timeout =
            Some(Duration::from_millis(config.server_selection_timeout_ms));

        let client = Client::with_options(options).map_err(connection_failed)?;
        let database = client.database(&config.database);
        let collection = database.collection::<Document>(&config.collection);

        info!(
            host = %redact_uri(&config.uri),
            database = %config.database,
            collection = %config.collection,
            "Initialized MongoDB backend"
        );

        Ok(Self {
            client,
            database,
            collection,
            config,
        })
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &MongoBackendConfig {
        &self.config
    }

    /// Returns the underlying driver client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl CoworkerStorage for MongoBackend {
    fn backend_kind(&self) -> BackendKind {
        BackendKind::MongoDB
    }

    async fn ping(&self) -> StorageResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn collections(&self) -> StorageResult<Vec<String>> {
        Ok(self.database.list_collection_names().await?)
    }

    async fn insert(&self, document: Document) -> StorageResult<Document> {
        let result = self.collection.insert_one(&document).await?;

        let mut stored = document;
        stored.insert(ID_FIELD, result.inserted_id);
        debug!(collection = %self.config.collection, "Inserted document");
        Ok(stored)
    }

    async fn find(&self, query: &CoworkerQuery) -> StorageResult<Vec<Document>> {
        let filter = query.filter_document();
        debug!(filter = %filter, sort_by = %query.sort_by(), limit = query.limit(), "Executing find");

        let cursor = self
            .collection
            .find(filter)
            .sort(query.sort_document())
            .limit(i64::from(query.limit()))
            .await?;

        Ok(cursor.try_collect::<Vec<Document>>().await?)
    }

    async fn find_by_id(&self, id: &ObjectId) -> StorageResult<Option<Document>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    async fn distinct(&self, field: &str) -> StorageResult<Vec<Bson>> {
        Ok(self.collection.distinct(field, doc! {}).await?)
    }
}

impl From<mongodb::error::Error> for StorageError {
    fn from(err: mongodb::error::Error) -> Self {
        let backend_name = BackendKind::MongoDB.to_string();
        let message = err.to_string();

        let error = match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. } => BackendError::Unavailable {
                backend_name,
                message,
            },
            _ => BackendError::Internal {
                backend_name,
                message,
            },
        };
        StorageError::Backend(error)
    }
}

fn connection_failed(err: mongodb::error::Error) -> StorageError {
    StorageError::Backend(BackendError::ConnectionFailed {
        backend_name: BackendKind::MongoDB.to_string(),
        message: err.to_string(),
    })
}

/// Strips credentials, path and options from a connection string, leaving
/// `scheme://host[:port]` for logging.
pub fn redact_uri(uri: &str) -> String {
    let (scheme, rest) = uri.split_once("://").unwrap_or(("mongodb", uri));
    let hosts = rest.rsplit_once('@').map_or(rest, |(_, hosts)| hosts);
    let hosts = hosts.split(['/', '?']).next().unwrap_or_default();
    format!("{}://{}", scheme, hosts)
}
