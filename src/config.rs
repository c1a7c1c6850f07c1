//! Command-line and environment configuration.
//!
//! Both structs are `clap` argument groups, so binaries flatten them into
//! their parsers and every value can come from a flag or the environment.

use crate::auth::adapters::sha256::DEFAULT_ROUNDS;
use clap::Args;
use std::fmt;

/// `PostgreSQL` connection settings.
#[derive(Clone, Args)]
pub struct DatabaseConfig {
    /// Database server host.
    #[arg(long = "db-host", env = "POSTGRES_HOST", default_value = "localhost")]
    pub host: String,

    /// Database server port.
    #[arg(long = "db-port", env = "POSTGRES_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Login role.
    #[arg(long = "db-user", env = "POSTGRES_USER", default_value = "postgres")]
    pub user: String,

    /// Login password; empty means none.
    #[arg(
        long = "db-password",
        env = "POSTGRES_PASSWORD",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,

    /// Database name.
    #[arg(long = "db-name", env = "POSTGRES_DB", default_value = "taskkeeper")]
    pub database: String,

    /// libpq `sslmode` value.
    #[arg(long = "db-sslmode", env = "POSTGRES_SSLMODE", default_value = "prefer")]
    pub sslmode: String,

    /// Maximum number of pooled connections.
    #[arg(long = "db-pool-size", env = "TASKKEEPER_POOL_SIZE", default_value_t = 4)]
    pub pool_size: u32,
}

impl DatabaseConfig {
    /// Renders a libpq keyword/value connection string.
    ///
    /// Values are single-quoted with backslash escapes; the password key is
    /// omitted when the password is empty.
    #[must_use]
    pub fn database_url(&self) -> String {
        let port = self.port.to_string();
        let mut pairs = vec![
            ("host", self.host.as_str()),
            ("port", port.as_str()),
            ("user", self.user.as_str()),
            ("dbname", self.database.as_str()),
            ("sslmode", self.sslmode.as_str()),
        ];
        if !self.password.is_empty() {
            pairs.push(("password", self.password.as_str()));
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("{key}={}", quote_conninfo(value)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn quote_conninfo(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("sslmode", &self.sslmode)
            .field("pool_size", &self.pool_size)
            .finish()
    }
}

/// Credential hashing settings.
#[derive(Clone, Args)]
pub struct AuthConfig {
    /// Server-side secret mixed into every password digest.
    #[arg(
        long = "password-secret",
        env = "TASKKEEPER_PASSWORD_SECRET",
        hide_env_values = true
    )]
    pub password_secret: String,

    /// Number of hashing rounds.
    #[arg(long = "hash-rounds", env = "TASKKEEPER_HASH_ROUNDS", default_value_t = DEFAULT_ROUNDS)]
    pub hash_rounds: u32,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("password_secret", &"<redacted>")
            .field("hash_rounds", &self.hash_rounds)
            .finish()
    }
}
