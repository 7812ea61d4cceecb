//! Task aggregate carrying the status the workflow engine governs.

use super::{Role, Status, TaskDomainError, TaskId, Transition};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Tracked task whose status is changed through the workflow policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    status: Status,
    commit_id: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted lifecycle status.
    pub status: Status,
    /// Latest commit reference recorded against the task, if any.
    pub commit_id: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest status-change timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in [`Status::Backlog`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: trimmed.to_owned(),
            status: Status::Backlog,
            commit_id: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            status: data.status,
            commit_id: data.commit_id,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the latest recorded commit reference.
    #[must_use]
    pub fn commit_id(&self) -> Option<&str> {
        self.commit_id.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest status-change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to `details.transition.to` and records the change.
    ///
    /// The transition must already have been validated against the policy;
    /// this method only mutates state.
    pub(crate) fn apply_status_change(
        &mut self,
        details: StatusChangeDetails,
        clock: &impl Clock,
    ) -> StatusChange {
        let changed_at = clock.utc();
        self.status = details.transition.to;
        if let Some(commit_id) = details.commit_id.as_ref() {
            self.commit_id = Some(commit_id.clone());
        }
        self.updated_at = changed_at;
        StatusChange {
            task_id: self.id,
            transition: details.transition,
            role: details.role,
            comment: details.comment,
            commit_id: details.commit_id,
            changed_at,
        }
    }
}

/// Validated inputs for [`Task::apply_status_change`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusChangeDetails {
    pub(crate) transition: Transition,
    pub(crate) role: Role,
    pub(crate) comment: Option<String>,
    pub(crate) commit_id: Option<String>,
}

/// Record of an applied status change, handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Task whose status changed.
    pub task_id: TaskId,
    /// Source and target status.
    pub transition: Transition,
    /// Role that performed the change.
    pub role: Role,
    /// Comment supplied with the change.
    pub comment: Option<String>,
    /// Commit reference supplied with the change.
    pub commit_id: Option<String>,
    /// Time the change was applied.
    pub changed_at: DateTime<Utc>,
}
