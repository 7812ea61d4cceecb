//! Service layer applying validated status changes to stored tasks.

use crate::workflow::{
    domain::{
        ParseStatusError, Status, StatusChange, StatusChangeDetails, Task, TaskDomainError,
        TaskId,
    },
    policy::{StatusChoices, WorkflowPolicy},
    ports::{TaskRepository, TaskRepositoryError},
    validation::{TransitionAttempt, TransitionValidator, WorkflowViolation},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for changing a task's status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    task_id: TaskId,
    target: String,
    role: String,
    comment: Option<String>,
    commit_id: Option<String>,
}

impl ChangeStatusRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(task_id: TaskId, target: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            task_id,
            target: target.into(),
            role: role.into(),
            comment: None,
            commit_id: None,
        }
    }

    /// Sets the comment accompanying the change.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the commit reference accompanying the change.
    #[must_use]
    pub fn with_commit_id(mut self, commit_id: impl Into<String>) -> Self {
        self.commit_id = Some(commit_id.into());
        self
    }
}

/// Service-level errors for status changes.
#[derive(Debug, Error)]
pub enum TaskStatusError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The requested target status is not a known status.
    #[error(transparent)]
    InvalidStatus(#[from] ParseStatusError),
    /// The change violates the workflow policy.
    #[error(transparent)]
    Violation(#[from] WorkflowViolation),
    /// The task already holds the requested status.
    #[error("task {task_id} already has status {status}")]
    Unchanged {
        /// Task identifier.
        task_id: TaskId,
        /// Status the task already holds.
        status: Status,
    },
    /// The task changed status after the request was validated.
    #[error("task {task_id} moved from {expected} to {actual} while the change was validated")]
    Conflict {
        /// Task identifier.
        task_id: TaskId,
        /// Status the change was validated against.
        expected: Status,
        /// Status the task holds now.
        actual: Status,
    },
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for status change operations.
pub type TaskStatusResult<T> = Result<T, TaskStatusError>;

/// Orchestrates status changes: load, validate, apply, store.
///
/// Nothing is written when validation fails.
#[derive(Clone)]
pub struct TaskStatusService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    policy: Arc<WorkflowPolicy>,
}

impl<R, C> TaskStatusService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service governed by the standard policy.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_policy(repository, clock, Arc::new(WorkflowPolicy::default()))
    }

    /// Creates a service governed by a custom policy.
    #[must_use]
    pub const fn with_policy(
        repository: Arc<R>,
        clock: Arc<C>,
        policy: Arc<WorkflowPolicy>,
    ) -> Self {
        Self {
            repository,
            clock,
            policy,
        }
    }

    /// Returns the policy in use.
    #[must_use]
    pub fn policy(&self) -> &WorkflowPolicy {
        &self.policy
    }

    /// Creates a task in [`Status::Backlog`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatusError::Domain`] for a blank title or
    /// [`TaskStatusError::Repository`] when persistence fails.
    pub async fn create_task(&self, title: impl Into<String>) -> TaskStatusResult<Task> {
        let task = Task::new(title, &*self.clock)?;
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatusError::Repository`] when lookup fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskStatusResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Returns the status selector model for a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatusError::NotFound`] when the task does not exist.
    pub async fn status_choices(
        &self,
        task_id: TaskId,
        role: &str,
    ) -> TaskStatusResult<StatusChoices> {
        let task = self.load(task_id).await?;
        Ok(self.policy.status_choices_for(task.status(), role))
    }

    /// Validates and applies a status change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStatusError::InvalidStatus`] for an unknown target,
    /// [`TaskStatusError::Unchanged`] when the task already holds it,
    /// [`TaskStatusError::Violation`] when the policy rejects the change,
    /// [`TaskStatusError::Conflict`] when another change moved the task first,
    /// and [`TaskStatusError::NotFound`] or [`TaskStatusError::Repository`]
    /// for lookup and persistence failures.
    pub async fn change_status(
        &self,
        request: ChangeStatusRequest,
    ) -> TaskStatusResult<StatusChange> {
        let target = Status::try_from(request.target.as_str())?;
        let mut task = self.load(request.task_id).await?;
        if task.status() == target {
            return Err(TaskStatusError::Unchanged {
                task_id: task.id(),
                status: target,
            });
        }

        let attempt = build_attempt(&task, target, &request);
        let validator = TransitionValidator::with_policy(&self.policy);
        let (role, _) = validator.validate_change(&attempt).map_err(|violation| {
            warn!(
                task_id = %task.id(),
                transition = %attempt.transition(),
                role = attempt.role(),
                %violation,
                "status change rejected"
            );
            TaskStatusError::from(violation)
        })?;

        let transition = attempt.transition();
        let details = StatusChangeDetails {
            transition,
            role,
            comment: attempt.comment().map(str::to_owned),
            commit_id: attempt.commit_id().map(str::to_owned),
        };
        let change = task.apply_status_change(details, &*self.clock);
        self.repository
            .update_if_status(&task, transition.from)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::StatusMismatch { task_id, actual, .. } => {
                    warn!(
                        %task_id,
                        %transition,
                        %actual,
                        "status change lost to a concurrent change"
                    );
                    TaskStatusError::Conflict {
                        task_id,
                        expected: transition.from,
                        actual,
                    }
                }
                other => other.into(),
            })?;
        info!(
            task_id = %change.task_id,
            transition = %change.transition,
            role = %change.role,
            "task status changed"
        );
        Ok(change)
    }

    async fn load(&self, task_id: TaskId) -> TaskStatusResult<Task> {
        self.repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskStatusError::NotFound(task_id))
    }
}

/// Builds the validator input, dropping blank optional fields and trimming
/// the rest.
fn build_attempt(task: &Task, target: Status, request: &ChangeStatusRequest) -> TransitionAttempt {
    let mut attempt = TransitionAttempt::new(task.status(), target, request.role.as_str());
    if let Some(comment) = non_blank(request.comment.as_deref()) {
        attempt = attempt.with_comment(comment);
    }
    if let Some(commit_id) = non_blank(request.commit_id.as_deref()) {
        attempt = attempt.with_commit_id(commit_id);
    }
    attempt
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|text| !text.is_empty())
}
