//! Domain model for the task status workflow.
//!
//! Statuses and roles are closed enumerations; transitions and their
//! requirements are plain values derived from them. The [`Task`] aggregate
//! holds the status that the workflow policy governs.

mod error;
mod ids;
mod role;
mod status;
mod task;
mod transition;

pub use error::{ParseRoleError, ParseStatusError, TaskDomainError};
pub use ids::TaskId;
pub use role::Role;
pub use status::{Status, StatusOption};
pub(crate) use task::StatusChangeDetails;
pub use task::{PersistedTaskData, StatusChange, Task};
pub use transition::{Transition, TransitionRequirement};
