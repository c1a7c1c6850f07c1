//! Taskkeeper: owner-scoped task management with credential-based access.
//!
//! Users register with a username and password; every task operation is
//! scoped to the user identity resolved from those credentials. Tasks follow
//! a two-state lifecycle (`START` then `END`) and are updated through sparse
//! patches.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and hashing
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`auth`]: User registration and credential resolution
//! - [`task`]: Task lifecycle and update composition
//! - [`app`]: Composition of both services over one backend
//! - [`config`], [`db`], [`telemetry`]: Process bootstrap

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod task;
pub mod telemetry;
