//! `PostgreSQL` adapters for task persistence.

mod models;
mod repository;
mod schema;
mod update_query;

pub use repository::PostgresTaskRepository;
