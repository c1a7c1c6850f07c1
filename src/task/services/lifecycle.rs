//! Service layer for owner-scoped task management.

use crate::auth::domain::UserId;
use crate::error::ErrorKind;
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskName, TaskPatch, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    name: String,
    #[serde(default)]
    status: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: None,
        }
    }

    /// Records a caller-supplied status.
    ///
    /// The value is accepted for payload compatibility only; creation always
    /// starts the lifecycle at [`TaskStatus::Start`].
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns the requested task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed before reaching the store.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task with this identifier belongs to the owner.
    #[error("task {task} not found for user {owner}")]
    NotFound {
        /// Owner the lookup was scoped to.
        owner: UserId,
        /// Requested task identifier.
        task: TaskId,
    },

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Classifies the error for transport mapping.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Repository(_) => ErrorKind::Store,
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Owner-scoped task orchestration service.
///
/// The service holds no state of its own: every call is a single round trip
/// to the repository, with the owner identity passed through as a predicate.
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a task for `owner` in the [`TaskStatus::Start`] status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the request breaks the
    /// payload contract: [`TaskName::new`] rejects a name that is blank after
    /// trimming ([`TaskDomainError::EmptyTaskName`]) or longer than 255
    /// characters ([`TaskDomainError::TaskNameTooLong`]). Returns
    /// [`TaskServiceError::Repository`] when the store rejects the insert.
    pub async fn create(
        &self,
        owner: UserId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<TaskId> {
        if let Some(ignored) = request.status.as_deref() {
            tracing::debug!(%owner, status = ignored, "ignoring caller-supplied status on create");
        }
        let name = TaskName::new(request.name)?;
        let id = self
            .repository
            .create(owner, &name, TaskStatus::Start)
            .await?;
        tracing::info!(%owner, task = %id, "task created");
        Ok(id)
    }

    /// Lists all tasks of `owner`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, owner: UserId) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list(owner).await?)
    }

    /// Returns task `id` of `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no such task belongs to
    /// `owner`, including when it belongs to someone else.
    pub async fn get_by_id(&self, owner: UserId, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(owner, id)
            .await?
            .ok_or(TaskServiceError::NotFound { owner, task: id })
    }

    /// Deletes task `id` of `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when nothing was deleted.
    pub async fn delete(&self, owner: UserId, id: TaskId) -> TaskServiceResult<()> {
        let removed = self.repository.delete(owner, id).await?;
        ensure_affected(removed, owner, id)?;
        tracing::info!(%owner, task = %id, "task deleted");
        Ok(())
    }

    /// Applies `patch` to task `id` of `owner`.
    ///
    /// The patch is validated first; an invalid patch never reaches the
    /// repository.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for an empty patch or an
    /// invalid status, and [`TaskServiceError::NotFound`] when no row was
    /// affected.
    pub async fn update(
        &self,
        owner: UserId,
        id: TaskId,
        patch: &TaskPatch,
    ) -> TaskServiceResult<()> {
        let mutation = patch.validate()?;
        let affected = self.repository.update(owner, id, &mutation).await?;
        ensure_affected(affected, owner, id)?;
        tracing::info!(%owner, task = %id, fields = mutation.len(), "task updated");
        Ok(())
    }
}

fn ensure_affected(rows: u64, owner: UserId, task: TaskId) -> TaskServiceResult<()> {
    if rows == 0 {
        tracing::warn!(%owner, %task, "task mutation matched no rows");
        return Err(TaskServiceError::NotFound { owner, task });
    }
    Ok(())
}
