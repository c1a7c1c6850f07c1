//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: i64,
    /// Owning user identifier.
    pub user_id: i64,
    /// Display name.
    pub name: String,
    /// Lifecycle status.
    pub status_end: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp.
    pub end_task_at: Option<DateTime<Utc>>,
}

/// Insert model for task records; timestamps come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Owning user identifier.
    pub user_id: i64,
    /// Display name.
    pub name: String,
    /// Initial lifecycle status.
    pub status_end: String,
}
