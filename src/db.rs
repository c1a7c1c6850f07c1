//! Connection pooling and schema bootstrap for `PostgreSQL`.

use crate::config::DatabaseConfig;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel::result::QueryResult;

/// Pooled `PostgreSQL` connections shared by the repositories.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Bundled migrations in application order.
const MIGRATIONS: &[(&str, &str)] = &[(
    "2026-10-18-000000_create_users_and_tasks",
    include_str!("../migrations/2026-10-18-000000_create_users_and_tasks/up.sql"),
)];

/// Builds a connection pool sized by `config.pool_size`.
///
/// # Errors
///
/// Returns [`PoolError`] when the initial connections cannot be opened.
pub fn build_pool(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let manager = ConnectionManager::<PgConnection>::new(config.database_url());
    Pool::builder()
        .max_size(config.pool_size.max(1))
        .build(manager)
}

/// Applies every bundled migration.
///
/// The migrations are idempotent, so this is safe to run on every start.
///
/// # Errors
///
/// Returns the first database error encountered.
pub fn apply_migrations(connection: &mut PgConnection) -> QueryResult<()> {
    for (name, sql) in MIGRATIONS {
        tracing::info!(migration = name, "applying migration");
        connection.batch_execute(sql)?;
    }
    Ok(())
}
