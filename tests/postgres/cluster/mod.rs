//! Embedded `PostgreSQL` cluster shared by the integration tests.
//!
//! The cluster starts once per test binary. Tests never touch the template
//! database directly; each one clones it into a [`TemporaryDatabase`].


use self::env_utils::worker_env_changes;
use self::fs_utils::{sync_password_from_file, sync_port_from_pid};
use super::helpers::test_runtime;
use crate::test_helpers::ScopedEnv;
use diesel::prelude::*;
use pg_embedded_setup_unpriv::worker_process_test_api::{
    WorkerOperation, WorkerRequest, WorkerRequestArgs, run as run_worker,
};
use pg_embedded_setup_unpriv::{ExecutionPrivileges, TestBootstrapSettings, bootstrap_for_tests};
use postgresql_embedded::{PostgreSQL, Settings, Status};
use rstest::fixture;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::Duration;
use taskkeeper::config::DatabaseConfig;
use tokio::runtime::Runtime;
use uuid::Uuid;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

static SHARED_CLUSTER: OnceLock<ManagedCluster> = OnceLock::new();
static TEMPLATE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Shared `PostgreSQL` cluster handle for integration tests.
pub type PostgresCluster = &'static ManagedCluster;

/// Connection settings of the running cluster.
#[derive(Debug, Clone)]
pub struct ClusterConnection {
    settings: Settings,
}

impl ClusterConnection {
    /// Returns a `postgresql://` URL for `database` on this cluster.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        self.settings.url(database)
    }

    /// Returns the application config pointing at `database`.
    #[must_use]
    pub fn database_config(&self, database: &str) -> DatabaseConfig {
        DatabaseConfig {
            host: self.settings.host.clone(),
            port: self.settings.port,
            user: self.settings.username.clone(),
            password: self.settings.password.clone(),
            database: database.to_owned(),
            sslmode: "disable".to_owned(),
            pool_size: 2,
        }
    }
}

/// Embedded cluster, started in-process or through `pg_worker` under root.
pub struct ManagedCluster {
    bootstrap: TestBootstrapSettings,
    env_vars: Vec<(String, Option<String>)>,
    runtime: Option<Runtime>,
    postgres: Option<PostgreSQL>,
}

impl ManagedCluster {
    fn new() -> Result<Self, BoxError> {
        let worker_env = worker_env_changes()?;
        let worker_scope = ScopedEnv::apply(&worker_env);
        let bootstrapped = bootstrap_for_tests();
        drop(worker_scope);
        let mut bootstrap = bootstrapped.map_err(|err| Box::new(err) as BoxError)?;
        sync_password_from_file(&mut bootstrap.settings)?;

        let env_vars = bootstrap.environment.to_env();
        let mut cluster = Self {
            bootstrap,
            env_vars,
            runtime: None,
            postgres: None,
        };
        cluster.start()?;
        Ok(cluster)
    }

    /// Returns the connection settings of the running cluster.
    #[must_use]
    pub fn connection(&self) -> ClusterConnection {
        ClusterConnection {
            settings: self.bootstrap.settings.clone(),
        }
    }

    /// Creates `template` and runs `migrate` against it unless it exists.
    ///
    /// A failed migration drops the half-built template again.
    pub fn ensure_template_exists<F>(&self, template: &str, migrate: F) -> Result<(), BoxError>
    where
        F: FnOnce(&str) -> Result<(), BoxError>,
    {
        let _guard = template_lock();
        if self.database_exists(template)? {
            return Ok(());
        }

        self.execute_admin_sql(&format!("CREATE DATABASE {}", quote_identifier(template)))?;
        if let Err(err) = migrate(template) {
            self.drop_database(template)?;
            return Err(err);
        }
        Ok(())
    }

    /// Clones `template` into a uniquely named database owned by the caller.
    pub fn temporary_database_from_template(
        &'static self,
        template: &str,
    ) -> Result<TemporaryDatabase, BoxError> {
        let name = format!("taskkeeper_test_{}", Uuid::new_v4().simple());
        {
            let _guard = template_lock();
            self.execute_admin_sql(&format!(
                "CREATE DATABASE {} TEMPLATE {}",
                quote_identifier(&name),
                quote_identifier(template),
            ))?;
        }
        let url = self.connection().database_url(&name);
        Ok(TemporaryDatabase {
            cluster: self,
            name,
            url,
        })
    }

    /// Drops `db_name`, disconnecting any remaining sessions.
    pub fn drop_database(&self, db_name: &str) -> Result<(), BoxError> {
        self.execute_admin_sql(&format!(
            "DROP DATABASE IF EXISTS {} WITH (FORCE)",
            quote_identifier(db_name)
        ))
    }

    fn start(&mut self) -> Result<(), BoxError> {
        match self.bootstrap.privileges {
            ExecutionPrivileges::Root => self.start_via_worker(),
            ExecutionPrivileges::Unprivileged => self.start_in_process(),
        }
    }

    fn start_in_process(&mut self) -> Result<(), BoxError> {
        let runtime = test_runtime()?;
        let env_scope = ScopedEnv::apply(&self.env_vars);
        let mut postgres = PostgreSQL::new(self.bootstrap.settings.clone());
        let started = runtime.block_on(async {
            postgres
                .setup()
                .await
                .map_err(|err| Box::new(err) as BoxError)?;
            if !matches!(postgres.status(), Status::Started) {
                postgres
                    .start()
                    .await
                    .map_err(|err| Box::new(err) as BoxError)?;
            }
            Ok::<(), BoxError>(())
        });
        drop(env_scope);
        started?;

        self.bootstrap.settings = postgres.settings().clone();
        sync_port_from_pid(&mut self.bootstrap.settings)?;
        self.runtime = Some(runtime);
        self.postgres = Some(postgres);
        Ok(())
    }

    fn start_via_worker(&mut self) -> Result<(), BoxError> {
        self.run_worker_operation(WorkerOperation::Setup, self.bootstrap.setup_timeout)?;
        self.run_worker_operation(WorkerOperation::Start, self.bootstrap.start_timeout)?;
        sync_port_from_pid(&mut self.bootstrap.settings)
    }

    fn stop(&mut self) -> Result<(), BoxError> {
        match (self.postgres.take(), &self.runtime) {
            (Some(postgres), Some(runtime)) => runtime
                .block_on(postgres.stop())
                .map_err(|err| Box::new(err) as BoxError),
            (None, _) if matches!(self.bootstrap.privileges, ExecutionPrivileges::Root) => {
                self.run_worker_operation(WorkerOperation::Stop, self.bootstrap.shutdown_timeout)
            }
            _ => Ok(()),
        }
    }

    fn run_worker_operation(
        &self,
        operation: WorkerOperation,
        timeout: Duration,
    ) -> Result<(), BoxError> {
        let worker = self.bootstrap.worker_binary.as_ref().ok_or_else(|| {
            Box::new(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "PG_EMBEDDED_WORKER is not set for worker operation",
            )) as BoxError
        })?;
        let args = WorkerRequestArgs {
            worker: worker.as_path(),
            settings: &self.bootstrap.settings,
            env_vars: &self.env_vars,
            operation,
            timeout,
        };
        run_worker(&WorkerRequest::new(args)).map_err(|err| Box::new(err) as BoxError)
    }

    fn admin_connection(&self) -> Result<PgConnection, BoxError> {
        let url = self.connection().database_url("postgres");
        PgConnection::establish(&url).map_err(|err| Box::new(err) as BoxError)
    }

    fn execute_admin_sql(&self, sql: &str) -> Result<(), BoxError> {
        let mut conn = self.admin_connection()?;
        diesel::sql_query(sql)
            .execute(&mut conn)
            .map_err(|err| Box::new(err) as BoxError)?;
        Ok(())
    }

    fn database_exists(&self, db_name: &str) -> Result<bool, BoxError> {
        #[derive(QueryableByName)]
        struct ExistsRow {
            #[diesel(sql_type = diesel::sql_types::Bool)]
            exists: bool,
        }

        let mut conn = self.admin_connection()?;
        let row = diesel::sql_query(
            "SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1) AS exists",
        )
        .bind::<diesel::sql_types::Text, _>(db_name)
        .get_result::<ExistsRow>(&mut conn)
        .map_err(|err| Box::new(err) as BoxError)?;
        Ok(row.exists)
    }
}

impl Drop for ManagedCluster {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            tracing::warn!(error = %err, "failed to stop embedded PostgreSQL");
        }
    }
}

/// Database cloned from the migrated template, dropped with the value.
pub struct TemporaryDatabase {
    cluster: PostgresCluster,
    name: String,
    url: String,
}

impl TemporaryDatabase {
    /// Returns the connection URL of this database.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the application config pointing at this database.
    #[must_use]
    pub fn config(&self) -> DatabaseConfig {
        self.cluster.connection().database_config(&self.name)
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        if let Err(err) = self.cluster.drop_database(&self.name) {
            tracing::warn!(database = %self.name, error = %err, "failed to drop test database");
        }
    }
}

/// Provides the embedded cluster, starting it on first use.
#[fixture]
pub fn postgres_cluster() -> PostgresCluster {
    SHARED_CLUSTER.get_or_init(|| match ManagedCluster::new() {
        Ok(cluster) => cluster,
        Err(err) => panic!("SKIP-TEST-CLUSTER: failed to start PostgreSQL: {err}"),
    })
}

fn template_lock() -> MutexGuard<'static, ()> {
    TEMPLATE_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::quote_identifier;
    use rstest::rstest;

    #[rstest]
    #[case("taskkeeper_test_template", "\"taskkeeper_test_template\"")]
    #[case("odd\"name", "\"odd\"\"name\"")]
    fn identifiers_are_double_quoted(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(quote_identifier(raw), expected);
    }
}
