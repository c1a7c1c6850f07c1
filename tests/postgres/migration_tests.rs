//! Schema bootstrap tests.

use super::helpers::{BoxError, PostgresContext, postgres_context};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use rstest::rstest;
use taskkeeper::db;

#[derive(QueryableByName)]
struct Count {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

#[rstest]
fn migrations_can_be_reapplied(postgres_context: PostgresContext) -> Result<(), BoxError> {
    let mut connection = PgConnection::establish(postgres_context.database.url())?;

    db::apply_migrations(&mut connection)?;

    let tables = diesel::sql_query(
        "SELECT COUNT(*) AS count FROM information_schema.tables \
         WHERE table_schema = 'public' AND table_name IN ('users', 'tasks')",
    )
    .get_result::<Count>(&mut connection)?;
    assert_eq!(tables.count, 2);
    Ok(())
}

#[rstest]
fn configured_pool_reaches_the_cloned_database(
    postgres_context: PostgresContext,
) -> Result<(), BoxError> {
    let pool = db::build_pool(&postgres_context.database.config())?;
    let mut connection = pool.get()?;

    let triggers = diesel::sql_query(
        "SELECT COUNT(*) AS count FROM information_schema.triggers \
         WHERE event_object_table = 'tasks'",
    )
    .get_result::<Count>(&mut connection)?;

    assert_eq!(triggers.count, 1);
    Ok(())
}
