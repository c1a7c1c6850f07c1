//! Task record and lifecycle status types.

use super::{ParseTaskStatusError, TaskAssignment, TaskId, TaskMutation, TaskName};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    /// Work on the task has started. Every task begins here.
    Start,
    /// The task has been finished.
    End,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::End => "END",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Parses the exact storage spelling; no case folding or trimming.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "START" => Ok(Self::Start),
            "END" => Ok(Self::End),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// A task owned by exactly one user.
///
/// Tasks are only ever materialized by a store: identifiers and timestamps
/// are store-assigned, so there is no public constructor beyond
/// [`Task::from_persisted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(rename = "user_id")]
    owner_id: UserId,
    name: TaskName,
    #[serde(rename = "status_end")]
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(rename = "end_task_at")]
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning user.
    pub owner_id: UserId,
    /// Persisted display name.
    pub name: TaskName,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted completion timestamp, if the task has ended.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            name: data.name,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the completion timestamp, set once the task has ended.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Applies a validated mutation with store semantics.
    ///
    /// Refreshes `updated_at`, stamps `completed_at` when the task is `END`
    /// without a completion time, and clears it when the task is `START`.
    /// Used by stores that cannot delegate this to the database.
    pub fn apply(&mut self, mutation: &TaskMutation, at: DateTime<Utc>) {
        for assignment in mutation.assignments() {
            match assignment {
                TaskAssignment::Name(name) => self.name = name.clone(),
                TaskAssignment::Status(status) => self.status = *status,
            }
        }
        self.completed_at = match self.status {
            TaskStatus::Start => None,
            TaskStatus::End => self.completed_at.or(Some(at)),
        };
        self.updated_at = at;
    }
}
