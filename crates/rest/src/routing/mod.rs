//! Route configuration for the Roster API.
//!
//! This module maps HTTP paths to handlers.

pub mod coworker_routes;

pub use coworker_routes::create_routes;
