//! Backend identification.

use std::fmt;

/// Identifies the type of storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// MongoDB (document store).
    MongoDB,
    /// In-process memory store.
    Memory,
}

impl BackendKind {
    /// Returns the lowercase backend name used in logs and errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::MongoDB => "mongodb",
            BackendKind::Memory => "memory",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
