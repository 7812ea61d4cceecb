//! Application services for task status changes.

mod status;

pub use status::{ChangeStatusRequest, TaskStatusError, TaskStatusResult, TaskStatusService};
