//! Then steps for task status change BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskflow::workflow::{
    domain::Status,
    policy::StatusChoices,
    services::TaskStatusError,
    validation::WorkflowViolation,
};

fn last_violation(world: &TaskStatusWorld) -> Result<&WorkflowViolation, eyre::Report> {
    let result = world
        .last_change_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status change result"))?;

    match result {
        Err(TaskStatusError::Violation(violation)) => Ok(violation),
        other => Err(eyre::eyre!("expected a workflow violation, got {other:?}")),
    }
}

fn last_choices(world: &TaskStatusWorld) -> Result<&StatusChoices, eyre::Report> {
    world
        .last_choices
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status choices"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = Status::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task_id = world.task()?.id();
    let stored = run_async(world.service.find_by_id(task_id))
        .wrap_err("look up scenario task")?
        .ok_or_else(|| eyre::eyre!("scenario task is missing from the repository"))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then(r#"the change is rejected for missing "{field}""#)]
fn change_rejected_for_missing(world: &TaskStatusWorld, field: String) -> Result<(), eyre::Report> {
    let violation = last_violation(world)?;
    if !violation
        .violations()
        .iter()
        .any(|entry| entry.field() == Some(field.as_str()))
    {
        return Err(eyre::eyre!(
            "expected a violation for field {field}, got {violation}"
        ));
    }
    Ok(())
}

#[then("the change is rejected as not permitted")]
fn change_rejected_as_not_permitted(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let violation = last_violation(world)?;
    if !violation
        .violations()
        .iter()
        .any(|entry| matches!(entry, WorkflowViolation::NotPermitted { .. }))
    {
        return Err(eyre::eyre!("expected NotPermitted violation, got {violation}"));
    }
    Ok(())
}

#[then("the status selector is enabled with {count:u64} transitions")]
fn selector_enabled_with(world: &TaskStatusWorld, count: u64) -> Result<(), eyre::Report> {
    let choices = last_choices(world)?;
    let transitions = u64::try_from(choices.transitions().len())?;
    if !choices.is_enabled() || transitions != count {
        return Err(eyre::eyre!(
            "expected an enabled selector with {count} transitions, got {}",
            transitions
        ));
    }
    Ok(())
}

#[then("the status selector is disabled")]
fn selector_disabled(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let choices = last_choices(world)?;
    if choices.is_enabled() {
        return Err(eyre::eyre!(
            "expected a disabled selector, got {} options",
            choices.options().len()
        ));
    }
    Ok(())
}
