//! Drives embedded `PostgreSQL` lifecycle steps for the integration test
//! harness when tests run as root.
//!
//! ```text
//! pg_worker <setup|start|stop> <payload.json>
//! ```
//!
//! The payload is a `pg_embedded_setup_unpriv` worker payload: the cluster
//! settings plus the environment the cluster expects. Under root the worker
//! switches to `nobody` after reading the payload and before touching the
//! cluster, because `initdb` and `postgres` refuse to run as root.

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[cfg(unix)]
fn main() -> Result<(), BoxError> {
    worker::run(std::env::args_os().skip(1)).map_err(Into::into)
}

#[cfg(not(unix))]
fn main() -> Result<(), BoxError> {
    Err("pg_worker requires a Unix host".into())
}

#[cfg(unix)]
mod worker {
    use super::BoxError;
    use camino::{Utf8Path, Utf8PathBuf};
    use nix::unistd::{Uid, User, initgroups, setgid, setuid};
    use pg_embedded_setup_unpriv::ambient_dir_and_path;
    use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
    use postgresql_embedded::{PostgreSQL, Status};
    use std::ffi::{CString, OsString};
    use std::fmt;
    use std::io::Read;
    use std::mem::ManuallyDrop;
    use thiserror::Error;

    const UNPRIVILEGED_USER: &str = "nobody";

    #[derive(Debug, Error)]
    pub(super) enum WorkerError {
        #[error("usage: pg_worker <setup|start|stop> <payload.json>: {0}")]
        Usage(String),
        #[error("failed to read payload {path}: {source}")]
        ReadPayload {
            path: Utf8PathBuf,
            #[source]
            source: BoxError,
        },
        #[error("malformed payload: {0}")]
        ParsePayload(#[from] serde_json::Error),
        #[error("invalid cluster settings: {0}")]
        Settings(String),
        #[error("failed to switch to nobody: {0}")]
        PrivilegeDrop(String),
        #[error("failed to build runtime: {0}")]
        Runtime(#[source] std::io::Error),
        #[error("postgres {step} failed: {reason}")]
        Postgres { step: Step, reason: String },
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(super) enum Step {
        Setup,
        Start,
        Stop,
    }

    impl Step {
        fn parse(raw: &str) -> Result<Self, WorkerError> {
            match raw {
                "setup" => Ok(Self::Setup),
                "start" => Ok(Self::Start),
                "stop" => Ok(Self::Stop),
                other => Err(WorkerError::Usage(format!("unknown step '{other}'"))),
            }
        }

        fn failed(self, err: impl fmt::Display) -> WorkerError {
            WorkerError::Postgres {
                step: self,
                reason: err.to_string(),
            }
        }
    }

    impl fmt::Display for Step {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(match self {
                Self::Setup => "setup",
                Self::Start => "start",
                Self::Stop => "stop",
            })
        }
    }

    pub(super) fn run(args: impl Iterator<Item = OsString>) -> Result<(), WorkerError> {
        let (step, payload_path) = parse_args(args)?;
        let payload = load_payload(&payload_path)?;
        become_unprivileged()?;

        let settings = payload
            .settings
            .into_settings()
            .map_err(|err| WorkerError::Settings(err.to_string()))?;
        apply_environment(&payload.environment);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(WorkerError::Runtime)?;

        let mut postgres = PostgreSQL::new(settings);
        match step {
            Step::Setup => runtime
                .block_on(postgres.setup())
                .map_err(|err| step.failed(err)),
            Step::Start => {
                if !matches!(postgres.status(), Status::Started) {
                    runtime
                        .block_on(postgres.start())
                        .map_err(|err| step.failed(err))?;
                }
                // The server must outlive this process.
                let _running = ManuallyDrop::new(postgres);
                Ok(())
            }
            Step::Stop => runtime
                .block_on(postgres.stop())
                .map_err(|err| step.failed(err)),
        }
    }

    fn parse_args(
        mut args: impl Iterator<Item = OsString>,
    ) -> Result<(Step, Utf8PathBuf), WorkerError> {
        let mut next_utf8 = |what: &str| {
            args.next()
                .ok_or_else(|| WorkerError::Usage(format!("missing {what}")))?
                .into_string()
                .map_err(|_| WorkerError::Usage(format!("{what} is not valid UTF-8")))
        };
        let step = Step::parse(&next_utf8("step")?)?;
        let payload_path = Utf8PathBuf::from(next_utf8("payload path")?);
        if let Some(extra) = args.next() {
            return Err(WorkerError::Usage(format!(
                "unexpected argument '{}'",
                extra.to_string_lossy()
            )));
        }
        Ok((step, payload_path))
    }

    fn load_payload(path: &Utf8Path) -> Result<WorkerPayload, WorkerError> {
        let bytes = read_payload(path).map_err(|source| WorkerError::ReadPayload {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn read_payload(path: &Utf8Path) -> Result<Vec<u8>, BoxError> {
        let (dir, relative) = ambient_dir_and_path(path)?;
        let mut file = dir.open(relative.as_std_path())?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    fn become_unprivileged() -> Result<(), WorkerError> {
        if !Uid::effective().is_root() {
            return Ok(());
        }
        let drop_failed = |err: nix::Error| WorkerError::PrivilegeDrop(err.to_string());

        let user = User::from_name(UNPRIVILEGED_USER)
            .map_err(drop_failed)?
            .ok_or_else(|| WorkerError::PrivilegeDrop("user does not exist".to_owned()))?;
        let login = CString::new(user.name.clone())
            .map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;
        initgroups(&login, user.gid).map_err(drop_failed)?;
        setgid(user.gid).map_err(drop_failed)?;
        setuid(user.uid).map_err(drop_failed)?;

        // SAFETY: no other threads exist yet; the runtime is built afterwards.
        unsafe {
            std::env::set_var("HOME", &user.dir);
            std::env::set_var("USER", &user.name);
            std::env::set_var("LOGNAME", &user.name);
        }
        Ok(())
    }

    fn apply_environment(environment: &[(String, Option<PlainSecret>)]) {
        for (key, value) in environment {
            // SAFETY: no other threads exist yet; the runtime is built afterwards.
            unsafe {
                match value {
                    Some(secret) => std::env::set_var(key, secret.expose()),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

}
