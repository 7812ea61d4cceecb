//! Shared world state for task status change BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskflow::workflow::{
    adapters::memory::InMemoryTaskRepository,
    domain::{StatusChange, Task},
    policy::StatusChoices,
    services::{ChangeStatusRequest, TaskStatusError, TaskStatusService},
};

/// Service type used by the BDD world.
pub type TestStatusService = TaskStatusService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for status change behaviour tests.
pub struct TaskStatusWorld {
    /// Service under test.
    pub service: TestStatusService,
    /// Task created by the scenario.
    pub task: Option<Task>,
    /// Comment to attach to the next status change.
    pub pending_comment: Option<String>,
    /// Commit reference to attach to the next status change.
    pub pending_commit_id: Option<String>,
    /// Selector model from the latest query.
    pub last_choices: Option<StatusChoices>,
    /// Outcome of the latest status change attempt.
    pub last_change_result: Option<Result<StatusChange, TaskStatusError>>,
}

impl TaskStatusWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskStatusService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            task: None,
            pending_comment: None,
            pending_commit_id: None,
            last_choices: None,
            last_change_result: None,
        }
    }

    /// Returns the scenario task or an error when none was created.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Builds a change request for the scenario task, consuming any pending
    /// comment and commit reference.
    pub fn take_request(
        &mut self,
        target: String,
        role: String,
    ) -> Result<ChangeStatusRequest, eyre::Report> {
        let task_id = self.task()?.id();
        let mut request = ChangeStatusRequest::new(task_id, target, role);
        if let Some(comment) = self.pending_comment.take() {
            request = request.with_comment(comment);
        }
        if let Some(commit_id) = self.pending_commit_id.take() {
            request = request.with_commit_id(commit_id);
        }
        Ok(request)
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
