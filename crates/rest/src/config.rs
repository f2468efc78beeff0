//! Server configuration for the Roster API.
//!
//! Every setting can come from a command line flag or an environment
//! variable; flags win.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ROSTER_PORT` | 8000 | Server port |
//! | `ROSTER_HOST` | 0.0.0.0 | Host to bind |
//! | `ROSTER_LOG_LEVEL` | info | Log level |
//! | `ROSTER_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ROSTER_ENABLE_CORS` | true | Enable CORS |
//! | `ROSTER_CORS_ORIGIN` | http://localhost:3000 | Allowed origins (comma-separated) |
//! | `ROSTER_STORAGE` | mongodb | Storage backend (`mongodb` or `memory`) |
//! | `MONGODB_URI` | - | MongoDB connection string (required for `mongodb`) |
//! | `ROSTER_DATABASE` | fastapi | MongoDB database name |
//! | `ROSTER_COLLECTION` | coworkers | MongoDB collection name |
//! | `ROSTER_MONGODB_TIMEOUT_MS` | 30000 | Server selection timeout (milliseconds) |
//!
//! # Example
//!
//! ```rust
//! use roster_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     mongodb_uri: Some("mongodb://localhost:27017".to_string()),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;

use axum::http::HeaderValue;
use clap::{ArgAction, Parser, ValueEnum};

/// Which storage backend the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendMode {
    /// MongoDB, reached through `MONGODB_URI`.
    Mongodb,
    /// In-process memory store; data is lost on shutdown.
    Memory,
}

impl fmt::Display for StorageBackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackendMode::Mongodb => write!(f, "mongodb"),
            StorageBackendMode::Memory => write!(f, "memory"),
        }
    }
}

/// Server configuration for the Roster API.
#[derive(Debug, Clone, Parser)]
#[command(name = "roster")]
#[command(about = "Coworker directory HTTP API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "ROSTER_PORT", default_value = "8000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "ROSTER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ROSTER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "ROSTER_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ROSTER_ENABLE_CORS", default_value = "true", action = ArgAction::Set)]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated). Credentials are allowed, so
    /// `*` is rejected.
    #[arg(long, env = "ROSTER_CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,

    /// Storage backend.
    #[arg(long, env = "ROSTER_STORAGE", value_enum, default_value = "mongodb")]
    pub storage: StorageBackendMode,

    /// MongoDB connection string.
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: Option<String>,

    /// MongoDB database name.
    #[arg(long, env = "ROSTER_DATABASE", default_value = "fastapi")]
    pub database: String,

    /// MongoDB collection name.
    #[arg(long, env = "ROSTER_COLLECTION", default_value = "coworkers")]
    pub collection: String,

    /// MongoDB server selection timeout in milliseconds.
    #[arg(long, env = "ROSTER_MONGODB_TIMEOUT_MS", default_value = "30000")]
    pub mongodb_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origin: "http://localhost:3000".to_string(),
            storage: StorageBackendMode::Mongodb,
            mongodb_uri: None,
            database: "fastapi".to_string(),
            collection: "coworkers".to_string(),
            mongodb_timeout_ms: 30000,
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured CORS origins as header values.
    ///
    /// Blank entries and entries that are not valid header values are
    /// skipped; [`validate`](Self::validate) reports them.
    pub fn cors_origins(&self) -> Vec<HeaderValue> {
        self.cors_origin
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty() && *origin != "*")
            .filter_map(|origin| origin.parse().ok())
            .collect()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.storage == StorageBackendMode::Mongodb
            && self.mongodb_uri.as_deref().is_none_or(|uri| uri.trim().is_empty())
        {
            errors.push("MONGODB_URI environment variable is not set".to_string());
        }

        if self.database.is_empty() {
            errors.push("Database name cannot be empty".to_string());
        }

        if self.collection.is_empty() {
            errors.push("Collection name cannot be empty".to_string());
        }

        if self.enable_cors {
            for origin in self.cors_origin.split(',').map(str::trim) {
                if origin == "*" {
                    errors.push(
                        "CORS origin '*' cannot be combined with credentials; list origins explicitly"
                            .to_string(),
                    );
                } else if origin.is_empty() || origin.parse::<HeaderValue>().is_err() {
                    errors.push(format!("Invalid CORS origin: '{}'", origin));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses the in-memory backend, an ephemeral port and CORS disabled.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            storage: StorageBackendMode::Memory,
            ..Default::default()
        }
    }
}
