//! Storage backend implementations.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | MongoDB | `mongodb` (default) | Document store reached through the official driver |
//! | Memory | always | In-process store for tests and local development |
//!
//! # Example
//!
//! ```
//! use roster_persistence::backends::memory::MemoryBackend;
//! use roster_persistence::core::CoworkerStorage;
//!
//! let backend = MemoryBackend::new();
//! assert_eq!(backend.backend_name(), "memory");
//! assert!(backend.is_empty());
//! ```

pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongodb;
