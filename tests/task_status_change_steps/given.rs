//! Given steps for task status change BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskStatusWorld, title: String) -> Result<(), eyre::Report> {
    let task = run_async(world.service.create_task(title)).wrap_err("create scenario task")?;
    world.task = Some(task);
    Ok(())
}

#[given(r#"the change carries comment "{comment}""#)]
fn change_carries_comment(world: &mut TaskStatusWorld, comment: String) {
    world.pending_comment = Some(comment);
}

#[given(r#"the change carries commit id "{commit_id}""#)]
fn change_carries_commit_id(world: &mut TaskStatusWorld, commit_id: String) {
    world.pending_commit_id = Some(commit_id);
}

#[given(r#"the task has been moved to "{target}" by a "{role}""#)]
fn task_has_been_moved(
    world: &mut TaskStatusWorld,
    target: String,
    role: String,
) -> Result<(), eyre::Report> {
    let request = world.take_request(target, role)?;
    run_async(world.service.change_status(request)).wrap_err("move task in scenario setup")?;
    Ok(())
}
