//! Workflow policy: which status changes are allowed, and what extra
//! information must accompany them.
//!
//! The policy is a data value rather than control flow. The standard table is
//! built once per process; custom tables come from
//! [`WorkflowPolicy::builder`] or a JSON [`PolicyDocument`].

mod builder;
mod document;
mod standard;
mod table;

pub use builder::WorkflowPolicyBuilder;
pub use document::{PolicyConfigError, PolicyDocument, PolicyRule};
pub use table::{PolicyCell, StatusChoices, WorkflowPolicy};
