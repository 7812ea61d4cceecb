//! Transition values and the requirements derived from them.

use super::Status;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A proposed change from one status to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// Status the task currently holds.
    pub from: Status,
    /// Status the task would move to.
    pub to: Status,
}

impl Transition {
    /// Creates a transition between two statuses.
    #[must_use]
    pub const fn new(from: Status, to: Status) -> Self {
        Self { from, to }
    }

    /// Returns `true` when the transition leaves the status unchanged.
    #[must_use]
    pub fn is_unchanged(self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Extra information that must accompany a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionRequirement {
    /// A commit reference must be supplied.
    pub commit_id_required: bool,
    /// A free-text comment must be supplied.
    pub comment_required: bool,
}

impl TransitionRequirement {
    /// Requirement set with nothing mandatory.
    pub const NONE: Self = Self {
        commit_id_required: false,
        comment_required: false,
    };

    /// Returns `true` when neither field is mandatory.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.commit_id_required && !self.comment_required
    }
}
