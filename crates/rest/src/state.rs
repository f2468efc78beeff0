//! Application state for the Roster API.
//!
//! The storage handle is constructed once at startup and injected here; it
//! is the only thing handlers share between requests.

use std::sync::Arc;

use roster_persistence::core::CoworkerStorage;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`CoworkerStorage`])
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use roster_persistence::backends::memory::MemoryBackend;
/// use roster_persistence::core::CoworkerStorage;
/// use roster_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::for_testing());
/// assert_eq!(state.storage().backend_name(), "memory");
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: CoworkerStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a clone of the storage Arc.
    pub fn storage_arc(&self) -> Arc<S> {
        Arc::clone(&self.storage)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
