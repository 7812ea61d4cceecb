//! Task lifecycle statuses in master display order.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete lifecycle stage of a task.
///
/// Variants are declared in master display order, so the derived [`Ord`]
/// matches the order in which statuses are presented to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Work is queued but not yet picked up.
    Backlog,
    /// Requirements are being analysed.
    Analysis,
    /// Work is being implemented.
    Development,
    /// Implementation is awaiting code review.
    CodeReview,
    /// System integration testing is in progress.
    SitTesting,
    /// System integration testing found defects.
    SitFailed,
    /// User acceptance testing is in progress.
    UatTesting,
    /// User acceptance testing found defects.
    UatFailed,
    /// Change is staged in the pre-production environment.
    Preprod,
    /// Change is live in production.
    Prod,
    /// Work has been completed.
    Completed,
    /// Task has been closed.
    Closed,
    /// Previously finished work has been reopened.
    Reopened,
    /// Work is blocked on an external dependency.
    Blocked,
}

impl Status {
    /// Every status in master display order.
    pub const ALL: [Self; 14] = [
        Self::Backlog,
        Self::Analysis,
        Self::Development,
        Self::CodeReview,
        Self::SitTesting,
        Self::SitFailed,
        Self::UatTesting,
        Self::UatFailed,
        Self::Preprod,
        Self::Prod,
        Self::Completed,
        Self::Closed,
        Self::Reopened,
        Self::Blocked,
    ];

    /// Returns the stable machine value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "BACKLOG",
            Self::Analysis => "ANALYSIS",
            Self::Development => "DEVELOPMENT",
            Self::CodeReview => "CODE_REVIEW",
            Self::SitTesting => "SIT_TESTING",
            Self::SitFailed => "SIT_FAILED",
            Self::UatTesting => "UAT_TESTING",
            Self::UatFailed => "UAT_FAILED",
            Self::Preprod => "PREPROD",
            Self::Prod => "PROD",
            Self::Completed => "COMPLETED",
            Self::Closed => "CLOSED",
            Self::Reopened => "REOPENED",
            Self::Blocked => "BLOCKED",
        }
    }

    /// Returns the human display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::Analysis => "Analysis",
            Self::Development => "Development",
            Self::CodeReview => "Code Review",
            Self::SitTesting => "SIT Testing",
            Self::SitFailed => "SIT Failed",
            Self::UatTesting => "UAT Testing",
            Self::UatFailed => "UAT Failed",
            Self::Preprod => "Pre-Prod",
            Self::Prod => "Prod",
            Self::Completed => "Completed",
            Self::Closed => "Closed",
            Self::Reopened => "Reopened",
            Self::Blocked => "Blocked",
        }
    }

    /// Returns the status paired with its display label.
    #[must_use]
    pub const fn option(self) -> StatusOption {
        StatusOption {
            value: self,
            label: self.label(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseStatusError(value.to_owned()))
    }
}

/// A selectable status together with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusOption {
    /// Machine value of the status.
    pub value: Status,
    /// Human display label.
    pub label: &'static str,
}
