//! Transition validation.
//!
//! Turns a proposed status change into either the requirements it satisfied
//! or a set of policy violations that callers surface as form errors.

mod error;
mod service;

pub use error::WorkflowViolation;
pub use service::{TransitionAttempt, TransitionValidator, ValidationResult};
