//! When steps for task status change BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"a "{role}" moves the task to "{target}""#)]
fn role_moves_task(
    world: &mut TaskStatusWorld,
    role: String,
    target: String,
) -> Result<(), eyre::Report> {
    let request = world.take_request(target, role)?;
    let result = run_async(world.service.change_status(request));
    world.last_change_result = Some(result);
    Ok(())
}

#[when(r#"a "{role}" opens the status selector"#)]
fn role_opens_selector(world: &mut TaskStatusWorld, role: String) -> Result<(), eyre::Report> {
    let task_id = world.task()?.id();
    let choices = run_async(world.service.status_choices(task_id, &role))
        .wrap_err("load status choices")?;
    world.last_choices = Some(choices);
    Ok(())
}
