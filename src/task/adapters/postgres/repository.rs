//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
    update_query::UpdateStatement,
};
use crate::auth::domain::UserId;
use crate::db::PgPool;
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskMutation, TaskName, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(
        &self,
        owner: UserId,
        name: &TaskName,
        status: TaskStatus,
    ) -> TaskRepositoryResult<TaskId> {
        let new_row = NewTaskRow {
            user_id: owner.value(),
            name: name.as_str().to_owned(),
            status_end: status.as_str().to_owned(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(tasks::id)
                .get_result::<i64>(connection)
                .map(TaskId::new)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        TaskRepositoryError::UnknownOwner(owner)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })
        })
        .await
    }

    async fn list(&self, owner: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::user_id.eq(owner.value()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, owner: UserId, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.value()))
                .filter(tasks::user_id.eq(owner.value()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(&self, owner: UserId, id: TaskId) -> TaskRepositoryResult<u64> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(
                tasks::table
                    .filter(tasks::id.eq(id.value()))
                    .filter(tasks::user_id.eq(owner.value())),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(removed).map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn update(
        &self,
        owner: UserId,
        id: TaskId,
        mutation: &TaskMutation,
    ) -> TaskRepositoryResult<u64> {
        let statement = UpdateStatement::compose(owner, id, mutation);
        tracing::debug!(
            sql = statement.sql(),
            binds = statement.binds().len(),
            "composed task update"
        );

        self.run_blocking(move |connection| {
            let affected = statement
                .into_query()
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            u64::try_from(affected).map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        user_id,
        name: persisted_name,
        status_end,
        created_at,
        updated_at,
        end_task_at,
    } = row;

    let name = TaskName::new(persisted_name).map_err(TaskRepositoryError::persistence)?;
    let status =
        TaskStatus::try_from(status_end.as_str()).map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        owner_id: UserId::new(user_id),
        name,
        status,
        created_at,
        updated_at,
        completed_at: end_task_at,
    }))
}
