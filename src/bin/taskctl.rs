//! Command-line client for a taskkeeper `PostgreSQL` database.
//!
//! Usage:
//!
//! ```text
//! taskctl migrate
//! taskctl register --username alice --password secret
//! taskctl add --username alice --password secret "Buy milk"
//! taskctl update --username alice --password secret 1 --status END
//! ```
//!
//! Database settings come from the `POSTGRES_*` variables and the hashing
//! secret from `TASKKEEPER_PASSWORD_SECRET`; see `--help` for the flags.
//! Results are written to stdout as JSON and diagnostics to stderr.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use taskkeeper::{
    app::PostgresTaskManager,
    auth::{adapters::Sha256PasswordHasher, domain::UserId, services::AuthServiceError},
    config::{AuthConfig, DatabaseConfig},
    db::{self, PgPool},
    error::ErrorKind,
    task::{
        domain::{TaskId, TaskPatch},
        services::{CreateTaskRequest, TaskServiceError},
    },
    telemetry::{self, TelemetryError},
};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "taskctl", version, about = "Manage taskkeeper users and tasks")]
struct Cli {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    auth: AuthConfig,

    /// Fallback log filter when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Credentials {
    /// Account name.
    #[arg(long)]
    username: String,

    /// Account password.
    #[arg(long, env = "TASKKEEPER_USER_PASSWORD", hide_env_values = true)]
    password: String,
}

#[derive(Subcommand)]
enum Command {
    /// Apply the bundled schema migrations.
    Migrate,
    /// Register a new user and print its id.
    Register(Credentials),
    /// Create a task in the START status.
    Add {
        #[command(flatten)]
        credentials: Credentials,
        /// Task name.
        name: String,
    },
    /// List the user's tasks, oldest first.
    List {
        #[command(flatten)]
        credentials: Credentials,
    },
    /// Show one task.
    Show {
        #[command(flatten)]
        credentials: Credentials,
        /// Task id.
        id: i64,
    },
    /// Rename a task and/or change its status.
    Update {
        #[command(flatten)]
        credentials: Credentials,
        /// Task id.
        id: i64,
        /// New task name.
        #[arg(long)]
        name: Option<String>,
        /// New status, `START` or `END`.
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a task.
    Delete {
        #[command(flatten)]
        credentials: Credentials,
        /// Task id.
        id: i64,
    },
}

/// Errors that end a `taskctl` invocation.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Auth(#[from] AuthServiceError),
    #[error(transparent)]
    Task(#[from] TaskServiceError),
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("migration failed: {0}")]
    Migration(#[from] diesel::result::Error),
    #[error("migration worker failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    const fn exit_code(&self) -> u8 {
        let kind = match self {
            Self::Auth(err) => err.kind(),
            Self::Task(err) => err.kind(),
            _ => ErrorKind::Store,
        };
        match kind {
            ErrorKind::Validation => 2,
            ErrorKind::NotFound => 3,
            ErrorKind::Store => 1,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = telemetry::init(&cli.log) {
        report_startup_failure(&err);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "taskctl failed");
            ExitCode::from(err.exit_code())
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "no tracing subscriber is available to report this failure"
)]
fn report_startup_failure(err: &TelemetryError) {
    eprintln!("taskctl: {err}");
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let pool = db::build_pool(&cli.database)?;
    let hasher = Arc::new(Sha256PasswordHasher::from_config(&cli.auth));
    let manager = PostgresTaskManager::postgres(pool.clone(), hasher);

    match cli.command {
        Command::Migrate => migrate(pool).await,
        Command::Register(account) => {
            let id = manager
                .auth()
                .register(&account.username, &account.password)
                .await?;
            emit(&json!({ "id": id }))
        }
        Command::Add { credentials, name } => {
            let owner = authenticate(&manager, &credentials).await?;
            let id = manager
                .tasks()
                .create(owner, CreateTaskRequest::new(name))
                .await?;
            emit(&json!({ "id": id }))
        }
        Command::List { credentials } => {
            let owner = authenticate(&manager, &credentials).await?;
            emit(&manager.tasks().list(owner).await?)
        }
        Command::Show { credentials, id } => {
            let owner = authenticate(&manager, &credentials).await?;
            emit(&manager.tasks().get_by_id(owner, TaskId::new(id)).await?)
        }
        Command::Update {
            credentials,
            id,
            name,
            status,
        } => {
            let owner = authenticate(&manager, &credentials).await?;
            let patch = TaskPatch { name, status };
            manager
                .tasks()
                .update(owner, TaskId::new(id), &patch)
                .await?;
            emit(&json!({ "updated": id }))
        }
        Command::Delete { credentials, id } => {
            let owner = authenticate(&manager, &credentials).await?;
            manager.tasks().delete(owner, TaskId::new(id)).await?;
            emit(&json!({ "deleted": id }))
        }
    }
}

async fn authenticate(
    manager: &PostgresTaskManager,
    credentials: &Credentials,
) -> Result<UserId, CliError> {
    Ok(manager
        .auth()
        .resolve(&credentials.username, &credentials.password)
        .await?)
}

async fn migrate(pool: PgPool) -> Result<(), CliError> {
    tokio::task::spawn_blocking(move || -> Result<(), CliError> {
        let mut connection = pool.get()?;
        db::apply_migrations(&mut connection)?;
        Ok(())
    })
    .await??;
    emit(&json!({ "migrated": true }))
}

fn emit<T: Serialize>(value: &T) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
