//! HTTP request handlers.
//!
//! - [`create`] - Create a coworker
//! - [`search`] - List and search coworkers
//! - [`read`] - Read a coworker by identifier
//! - [`departments`] - List distinct departments
//! - [`health`] - Health and database check endpoints

pub mod create;
pub mod departments;
pub mod health;
pub mod read;
pub mod search;

// Re-export handlers for convenience
pub use create::create_handler;
pub use departments::{DepartmentList, departments_handler};
pub use health::{DatabaseCheck, HealthStatus, db_check_handler, health_handler, liveness_handler};
pub use read::read_handler;
pub use search::list_handler;
