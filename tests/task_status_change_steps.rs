//! Behaviour tests for task status changes governed by the workflow policy.

#[path = "task_status_change_steps/mod.rs"]
mod task_status_change_steps_defs;

use rstest_bdd_macros::scenario;
use task_status_change_steps_defs::world::{TaskStatusWorld, world};

#[scenario(
    path = "tests/features/task_status_changes.feature",
    name = "Team member sends development work back to the backlog"
)]
#[tokio::test(flavor = "multi_thread")]
async fn team_member_sends_work_back(world: TaskStatusWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_status_changes.feature",
    name = "Status selector is disabled once a task is in production"
)]
#[tokio::test(flavor = "multi_thread")]
async fn selector_disabled_in_production(world: TaskStatusWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_status_changes.feature",
    name = "Moving to pre-production requires a commit id"
)]
#[tokio::test(flavor = "multi_thread")]
async fn preprod_requires_commit_id(world: TaskStatusWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_status_changes.feature",
    name = "Leaving code review requires a comment regardless of role"
)]
#[tokio::test(flavor = "multi_thread")]
async fn code_review_requires_comment(world: TaskStatusWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_status_changes.feature",
    name = "Unrecognized role cannot change status"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unrecognized_role_cannot_change_status(world: TaskStatusWorld) {
    let _ = world;
}
