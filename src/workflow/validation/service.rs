//! Validation of proposed status changes against a workflow policy.

use crate::workflow::{
    domain::{Role, Status, Transition, TransitionRequirement},
    policy::WorkflowPolicy,
};

use super::WorkflowViolation;

/// Result type for transition validation.
pub type ValidationResult<T> = Result<T, WorkflowViolation>;

/// A status change as submitted from a task-editing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionAttempt {
    transition: Transition,
    role: String,
    comment: Option<String>,
    commit_id: Option<String>,
}

impl TransitionAttempt {
    /// Creates an attempt without comment or commit reference.
    #[must_use]
    pub fn new(from: Status, to: Status, role: impl Into<String>) -> Self {
        Self {
            transition: Transition::new(from, to),
            role: role.into(),
            comment: None,
            commit_id: None,
        }
    }

    /// Sets the free-text comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the commit reference.
    #[must_use]
    pub fn with_commit_id(mut self, commit_id: impl Into<String>) -> Self {
        self.commit_id = Some(commit_id.into());
        self
    }

    /// Returns the proposed transition.
    #[must_use]
    pub const fn transition(&self) -> Transition {
        self.transition
    }

    /// Returns the role as supplied by the caller.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the comment, if supplied.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns the commit reference, if supplied.
    #[must_use]
    pub fn commit_id(&self) -> Option<&str> {
        self.commit_id.as_deref()
    }
}

/// Checks proposed status changes against a [`WorkflowPolicy`].
///
/// All violations are collected before returning, so a form can flag every
/// missing field at once.
///
/// # Examples
///
/// ```
/// use taskflow::workflow::domain::Status;
/// use taskflow::workflow::validation::{TransitionAttempt, TransitionValidator};
///
/// let validator = TransitionValidator::new();
/// let attempt = TransitionAttempt::new(Status::UatTesting, Status::Preprod, "TESTER")
///     .with_commit_id("9f3c2ab");
///
/// let requirement = validator.validate(&attempt).expect("permitted transition");
/// assert!(requirement.commit_id_required);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TransitionValidator<'p> {
    policy: &'p WorkflowPolicy,
}

impl TransitionValidator<'static> {
    /// Creates a validator backed by the standard policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: WorkflowPolicy::standard(),
        }
    }
}

impl Default for TransitionValidator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> TransitionValidator<'p> {
    /// Creates a validator backed by a custom policy.
    #[must_use]
    pub const fn with_policy(policy: &'p WorkflowPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy in use.
    #[must_use]
    pub const fn policy(&self) -> &'p WorkflowPolicy {
        self.policy
    }

    /// Validates an attempt and returns the requirements it satisfied.
    ///
    /// An attempt that keeps the current status is not a transition and is
    /// accepted with [`TransitionRequirement::NONE`].
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowViolation`] naming every violated rule. Two or more
    /// violations are combined in [`WorkflowViolation::Multiple`].
    pub fn validate(&self, attempt: &TransitionAttempt) -> ValidationResult<TransitionRequirement> {
        if attempt.transition().is_unchanged() {
            return Ok(TransitionRequirement::NONE);
        }
        self.validate_change(attempt).map(|(_, requirement)| requirement)
    }

    /// Validates an attempt that must change the status, returning the parsed
    /// role together with the requirements it satisfied.
    ///
    /// Unlike [`Self::validate`], an unchanged status is not special-cased:
    /// no rule permits staying put, so it is reported as
    /// [`WorkflowViolation::NotPermitted`].
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowViolation`] naming every violated rule. Two or more
    /// violations are combined in [`WorkflowViolation::Multiple`].
    pub fn validate_change(
        &self,
        attempt: &TransitionAttempt,
    ) -> ValidationResult<(Role, TransitionRequirement)> {
        let transition = attempt.transition();
        let requirement = self.policy.requirements(transition);

        let mut violations = Vec::new();
        let permission = self.validate_permission(attempt);
        if let Err(violation) = &permission {
            violations.push(violation.clone());
        }
        if requirement.commit_id_required && is_blank(attempt.commit_id()) {
            violations.push(WorkflowViolation::MissingCommitId { to: transition.to });
        }
        if requirement.comment_required && is_blank(attempt.comment()) {
            violations.push(WorkflowViolation::MissingComment {
                from: transition.from,
            });
        }

        WorkflowViolation::into_result(violations)?;
        permission.map(|role| (role, requirement))
    }

    /// Checks only that the acting role may perform the transition and
    /// returns the parsed role.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowViolation::NotPermitted`] when the role is unknown or
    /// the policy has no matching rule.
    pub fn validate_permission(&self, attempt: &TransitionAttempt) -> ValidationResult<Role> {
        let Transition { from, to } = attempt.transition();
        Role::try_from(attempt.role())
            .ok()
            .filter(|role| self.policy.permits(from, to, *role))
            .ok_or_else(|| WorkflowViolation::NotPermitted {
                from,
                to,
                role: attempt.role().to_owned(),
            })
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|text| text.trim().is_empty())
}
