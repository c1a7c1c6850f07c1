//! Then steps for task management BDD scenarios.

use super::world::{TaskManagementWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskkeeper::{
    auth::services::AuthServiceError,
    task::{
        domain::{Task, TaskStatus},
        services::TaskServiceError,
    },
};

fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))
}

fn owned_task(world: &TaskManagementWorld, username: &str) -> Result<Task, eyre::Report> {
    let owner = world.user(username)?;
    let task = world.task()?;
    run_async(world.manager.tasks().get_by_id(owner, task)).wrap_err("reload scenario task")
}

#[then(r#"authentication resolves to the identity of "{username}""#)]
fn resolves_to_user(world: &TaskManagementWorld, username: String) -> Result<(), eyre::Report> {
    let expected = world.user(&username)?;
    match world.last_resolution.as_ref() {
        Some(Ok(resolved)) if *resolved == expected => Ok(()),
        other => Err(eyre::eyre!("expected identity {expected}, got {other:?}")),
    }
}

#[then("authentication fails with not found")]
fn authentication_not_found(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    match world.last_resolution.as_ref() {
        Some(Err(AuthServiceError::NotFound)) => Ok(()),
        other => Err(eyre::eyre!("expected NotFound, got {other:?}")),
    }
}

#[then("the listed task count is {count:usize}")]
fn listed_task_count(world: &TaskManagementWorld, count: usize) -> Result<(), eyre::Report> {
    if world.listed.len() != count {
        return Err(eyre::eyre!(
            "expected {count} listed tasks, found {}",
            world.listed.len()
        ));
    }
    Ok(())
}

#[then(r#"the listed task "{name}" has status "{status}""#)]
fn listed_task_has_status(
    world: &TaskManagementWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task = world
        .listed
        .iter()
        .find(|task| task.name().as_str() == name)
        .ok_or_else(|| eyre::eyre!("task {name} is not in the listing"))?;

    if task.status() != expected {
        return Err(eyre::eyre!("expected status {expected}, found {}", task.status()));
    }
    if task.created_at() > task.updated_at() {
        return Err(eyre::eyre!("creation timestamp is after the update timestamp"));
    }
    Ok(())
}

#[then("the update succeeds")]
fn update_succeeds(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    match world.last_update.as_ref() {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected a successful update, got {other:?}")),
    }
}

#[then("the update fails with not found")]
fn update_not_found(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    match world.last_update.as_ref() {
        Some(Err(TaskServiceError::NotFound { .. })) => Ok(()),
        other => Err(eyre::eyre!("expected NotFound, got {other:?}")),
    }
}

#[then(r#"the update fails with "{message}""#)]
fn update_fails_with_message(
    world: &TaskManagementWorld,
    message: String,
) -> Result<(), eyre::Report> {
    match world.last_update.as_ref() {
        Some(Err(err @ TaskServiceError::Validation(_))) if err.to_string().contains(&message) => {
            Ok(())
        }
        other => Err(eyre::eyre!(
            "expected a validation error mentioning {message:?}, got {other:?}"
        )),
    }
}

#[then(r#"the task owned by "{username}" is named "{name}" with status "{status}""#)]
fn owned_task_matches(
    world: &TaskManagementWorld,
    username: String,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let task = owned_task(world, &username)?;

    if task.name().as_str() != name || task.status() != expected {
        return Err(eyre::eyre!(
            "expected {name:?} with status {expected}, found {:?} with status {}",
            task.name().as_str(),
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"the task owned by "{username}" has a completion timestamp"#)]
fn owned_task_is_completed(
    world: &TaskManagementWorld,
    username: String,
) -> Result<(), eyre::Report> {
    let task = owned_task(world, &username)?;
    if task.completed_at().is_none() {
        return Err(eyre::eyre!("expected a completion timestamp"));
    }
    Ok(())
}
