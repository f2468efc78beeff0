//! Roster server
//!
//! Serves the coworker directory API over MongoDB or an in-memory store.
//! Settings come from flags, the environment, or a `.env` file in the
//! working directory.

use clap::Parser;
use roster_persistence::backends::memory::MemoryBackend;
use roster_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use tracing::info;

#[cfg(feature = "mongodb")]
use roster_persistence::backends::mongodb::{MongoBackend, MongoBackendConfig, redact_uri};

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values already in the environment win over the file.
    let env_file = dotenvy::dotenv().ok();

    let config = ServerConfig::parse();

    init_logging(&config.log_level);

    if let Some(path) = &env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %config.storage,
        "Starting Roster server"
    );

    match config.storage {
        StorageBackendMode::Mongodb => start_mongodb(config).await?,
        StorageBackendMode::Memory => start_memory(config).await?,
    }

    Ok(())
}

/// Starts the server with the in-memory backend.
async fn start_memory(config: ServerConfig) -> anyhow::Result<()> {
    info!("Using in-memory storage; data will not survive a restart");
    let app = create_app_with_config(
        MemoryBackend::with_collection(config.collection.clone()),
        config.clone(),
    );
    serve(app, &config).await
}

/// Starts the server with the MongoDB backend.
///
/// The server refuses to start if the first ping fails.
#[cfg(feature = "mongodb")]
async fn start_mongodb(config: ServerConfig) -> anyhow::Result<()> {
    use roster_persistence::core::CoworkerStorage;

    let uri = config
        .mongodb_uri
        .clone()
        .ok_or_else(|| anyhow::anyhow!("MONGODB_URI environment variable is not set"))?;

    let backend_config = MongoBackendConfig {
        database: config.database.clone(),
        collection: config.collection.clone(),
        server_selection_timeout_ms: config.mongodb_timeout_ms,
        ..MongoBackendConfig::new(uri)
    };

    info!(host = %redact_uri(&backend_config.uri), "Connecting to MongoDB");
    let backend = MongoBackend::connect(backend_config).await?;

    if let Err(e) = backend.ping().await {
        tracing::error!(error = %e, "MongoDB ping failed");
        return Err(e.into());
    }
    info!("MongoDB connection verified");

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when mongodb feature is not enabled.
#[cfg(not(feature = "mongodb"))]
async fn start_mongodb(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The mongodb backend requires the 'mongodb' feature. \
         Build with: cargo build -p roster --features mongodb"
    )
}
