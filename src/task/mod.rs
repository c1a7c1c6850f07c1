//! Per-user task management.
//!
//! Tasks are created in the `START` status, listed, fetched, patched and
//! deleted, always scoped to the owning user. The owner identity is a
//! predicate of every store operation, never a filter applied after a fetch.
//! The module follows hexagonal architecture:
//!
//! - Domain types and patch validation in [`domain`]
//! - Port contracts in [`ports`]
//! - In-memory and `PostgreSQL` implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
