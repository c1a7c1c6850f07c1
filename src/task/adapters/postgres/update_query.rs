//! Positional-parameter `UPDATE` statements for task mutations.
//!
//! The `SET` list and the bind list are built in one pass so that the
//! placeholder of every assignment is its position in the bind list. The
//! task-id and owner-id predicates are always bound last, in that order.

use crate::auth::domain::UserId;
use crate::task::domain::{TaskAssignment, TaskField, TaskId, TaskMutation};
use diesel::pg::Pg;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{BigInt, Text};

/// Value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum BindValue {
    /// A `TEXT`/`VARCHAR` parameter.
    Text(String),
    /// A `BIGINT` parameter.
    BigInt(i64),
}

/// A composed `UPDATE` with its binds in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct UpdateStatement {
    sql: String,
    binds: Vec<BindValue>,
}

const fn column(field: TaskField) -> &'static str {
    match field {
        TaskField::Name => "name",
        TaskField::Status => "status_end",
    }
}

fn bind_value(assignment: &TaskAssignment) -> BindValue {
    match assignment {
        TaskAssignment::Name(name) => BindValue::Text(name.as_str().to_owned()),
        TaskAssignment::Status(status) => BindValue::Text(status.as_str().to_owned()),
    }
}

impl UpdateStatement {
    /// Builds the statement updating task `id` of `owner`.
    pub(super) fn compose(owner: UserId, id: TaskId, mutation: &TaskMutation) -> Self {
        let mut set_clauses = Vec::with_capacity(mutation.len());
        let mut binds = Vec::with_capacity(mutation.len() + 2);

        for assignment in mutation.assignments() {
            binds.push(bind_value(assignment));
            set_clauses.push(format!("{} = ${}", column(assignment.field()), binds.len()));
        }

        binds.push(BindValue::BigInt(id.value()));
        let id_placeholder = binds.len();
        binds.push(BindValue::BigInt(owner.value()));
        let owner_placeholder = binds.len();

        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ${id_placeholder} AND user_id = ${owner_placeholder}",
            set_clauses.join(", "),
        );
        Self { sql, binds }
    }

    /// Returns the SQL text.
    pub(super) fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the binds in placeholder order.
    pub(super) fn binds(&self) -> &[BindValue] {
        &self.binds
    }

    /// Converts the statement into an executable Diesel query.
    pub(super) fn into_query(self) -> BoxedSqlQuery<'static, Pg, SqlQuery> {
        let query: BoxedSqlQuery<'static, Pg, SqlQuery> = diesel::sql_query(self.sql).into_boxed();
        self.binds
            .into_iter()
            .fold(query, |bound, value| match value {
                BindValue::Text(text) => bound.bind::<Text, _>(text),
                BindValue::BigInt(number) => bound.bind::<BigInt, _>(number),
            })
    }
}
