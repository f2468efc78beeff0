//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server wired to an in-memory backend
//! - [`fixtures`] - Coworker payloads
//! - [`failing`] - Backend that fails every operation

#![allow(dead_code)]

pub mod failing;
pub mod fixtures;
pub mod harness;
