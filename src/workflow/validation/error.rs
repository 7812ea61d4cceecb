//! Policy violations raised when a proposed status change is rejected.

use crate::workflow::domain::Status;
use thiserror::Error;

/// Reason a proposed status change cannot be applied.
///
/// Each single violation names the form field a caller should flag.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowViolation {
    /// The acting role may not perform the transition.
    #[error("status: role '{role}' may not move a task from {from} to {to}")]
    NotPermitted {
        /// Current status.
        from: Status,
        /// Requested status.
        to: Status,
        /// Role as supplied by the caller.
        role: String,
    },

    /// The target status needs a commit reference and none was supplied.
    #[error("commit_id: a commit id is required to move a task to {to}")]
    MissingCommitId {
        /// Requested status.
        to: Status,
    },

    /// The source status needs a comment and none was supplied.
    #[error("comment: a comment is required to move a task out of {from}")]
    MissingComment {
        /// Current status.
        from: Status,
    },

    /// More than one violation occurred.
    #[error("multiple workflow violations: {}", format_violations(.0))]
    Multiple(Vec<Self>),
}

fn format_violations(violations: &[WorkflowViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl WorkflowViolation {
    /// Folds collected violations into a result, wrapping two or more in
    /// [`Self::Multiple`].
    pub(crate) fn into_result(mut violations: Vec<Self>) -> Result<(), Self> {
        if violations.len() > 1 {
            return Err(Self::Multiple(violations));
        }
        violations.pop().map_or(Ok(()), Err)
    }

    /// Returns the form field a single violation refers to.
    ///
    /// Returns `None` for [`Self::Multiple`]; use [`Self::violations`] to
    /// inspect each entry.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotPermitted { .. } => Some("status"),
            Self::MissingCommitId { .. } => Some("commit_id"),
            Self::MissingComment { .. } => Some("comment"),
            Self::Multiple(_) => None,
        }
    }

    /// Returns the individual violations, flattening [`Self::Multiple`].
    #[must_use]
    pub fn violations(&self) -> &[Self] {
        match self {
            Self::Multiple(violations) => violations,
            single => std::slice::from_ref(single),
        }
    }

    /// Returns `true` when this represents more than one violation.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }
}
