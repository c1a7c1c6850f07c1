//! In-memory task repository for tests and local runs.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::auth::domain::UserId;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskMutation, TaskName, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned sequentially from 1 and timestamps come from the
/// injected clock, mirroring what the `PostgreSQL` schema assigns.
pub struct InMemoryTaskRepository<C = DefaultClock> {
    state: Arc<RwLock<InMemoryTaskState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i64,
}

impl InMemoryTaskRepository<DefaultClock> {
    /// Creates an empty in-memory repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryTaskRepository<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryTaskRepository<C> {
    /// Creates an empty in-memory repository stamping rows with `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::default(),
            clock,
        }
    }
}

impl<C> Clone for InMemoryTaskRepository<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

fn lock_error(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Returns the task only when it belongs to `owner`.
fn owned_mut(state: &mut InMemoryTaskState, owner: UserId, id: TaskId) -> Option<&mut Task> {
    state
        .tasks
        .get_mut(&id)
        .filter(|task| task.owner_id() == owner)
}

#[async_trait]
impl<C> TaskRepository for InMemoryTaskRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn create(
        &self,
        owner: UserId,
        name: &TaskName,
        status: TaskStatus,
    ) -> TaskRepositoryResult<TaskId> {
        let timestamp = self.clock.utc();
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id += 1;
        let id = TaskId::new(state.last_id);

        let task = Task::from_persisted(PersistedTaskData {
            id,
            owner_id: owner,
            name: name.clone(),
            status,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
        });
        state.tasks.insert(id, task);
        Ok(id)
    }

    async fn list(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| task.owner_id() == owner)
            .cloned()
            .collect();
        tasks.sort_by_key(|task| (task.created_at(), task.id()));
        Ok(tasks)
    }

    async fn find_by_id(&self, owner: UserId, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .tasks
            .get(&id)
            .filter(|task| task.owner_id() == owner)
            .cloned())
    }

    async fn delete(&self, owner: UserId, id: TaskId) -> TaskRepositoryResult<u64> {
        let mut state = self.state.write().map_err(lock_error)?;
        if owned_mut(&mut state, owner, id).is_none() {
            return Ok(0);
        }
        state.tasks.remove(&id);
        Ok(1)
    }

    async fn update(
        &self,
        owner: UserId,
        id: TaskId,
        mutation: &TaskMutation,
    ) -> TaskRepositoryResult<u64> {
        let timestamp = self.clock.utc();
        let mut state = self.state.write().map_err(lock_error)?;
        let Some(task) = owned_mut(&mut state, owner, id) else {
            return Ok(0);
        };
        task.apply(mutation, timestamp);
        Ok(1)
    }
}
