//! Query surface of the workflow policy table.

use crate::workflow::domain::{Role, Status, StatusOption, Transition, TransitionRequirement};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use super::WorkflowPolicyBuilder;

/// Immutable mapping from (status, role) to permitted target statuses,
/// together with the statuses that demand a commit reference or a comment.
///
/// Every (status, role) pair is answerable: a pair with no configured rule
/// permits no transitions. Target sets are stored as ordered sets keyed by
/// [`Status`], so query results always follow master display order.
///
/// # Examples
///
/// ```
/// use taskflow::workflow::domain::{Role, Status};
/// use taskflow::workflow::policy::WorkflowPolicy;
///
/// let policy = WorkflowPolicy::standard();
/// let targets: Vec<Status> = policy
///     .available_transitions(Status::Backlog, Role::TeamMember)
///     .into_iter()
///     .map(|option| option.value)
///     .collect();
/// assert_eq!(targets, vec![Status::Development, Status::CodeReview]);
/// assert!(policy.requires_commit_id(Status::Preprod));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowPolicy {
    pub(super) rules: BTreeMap<(Status, Role), BTreeSet<Status>>,
    pub(super) commit_id_targets: BTreeSet<Status>,
    pub(super) comment_sources: BTreeSet<Status>,
}

/// One cell of the policy table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyCell {
    /// Source status.
    pub from: Status,
    /// Acting role.
    pub role: Role,
    /// Permitted targets in master display order.
    pub targets: Vec<Status>,
}

impl WorkflowPolicy {
    /// Returns a builder for a custom policy table.
    #[must_use]
    pub fn builder() -> WorkflowPolicyBuilder {
        WorkflowPolicyBuilder::default()
    }

    /// Returns a policy that permits nothing and requires nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
            commit_id_targets: BTreeSet::new(),
            comment_sources: BTreeSet::new(),
        }
    }

    fn targets(&self, current: Status, role: Role) -> impl Iterator<Item = Status> + '_ {
        self.rules.get(&(current, role)).into_iter().flatten().copied()
    }

    /// Returns the statuses `role` may move a task to from `current`, in
    /// master display order.
    #[must_use]
    pub fn available_transitions(&self, current: Status, role: Role) -> Vec<StatusOption> {
        self.targets(current, role).map(Status::option).collect()
    }

    /// Same as [`Self::available_transitions`] for a raw role string.
    ///
    /// Unrecognized roles have no permissions and yield an empty list.
    #[must_use]
    pub fn available_transitions_for(&self, current: Status, role: &str) -> Vec<StatusOption> {
        match Role::try_from(role) {
            Ok(parsed) => self.available_transitions(current, parsed),
            Err(err) => {
                debug!(%current, %err, "no workflow permissions for unrecognized role");
                Vec::new()
            }
        }
    }

    /// Returns the status selector model for a task in `current`.
    #[must_use]
    pub fn status_choices(&self, current: Status, role: Role) -> StatusChoices {
        StatusChoices::new(current, self.available_transitions(current, role))
    }

    /// Same as [`Self::status_choices`] for a raw role string.
    #[must_use]
    pub fn status_choices_for(&self, current: Status, role: &str) -> StatusChoices {
        StatusChoices::new(current, self.available_transitions_for(current, role))
    }

    /// Returns `true` when `role` may move a task from `current` to `target`.
    #[must_use]
    pub fn permits(&self, current: Status, target: Status, role: Role) -> bool {
        self.rules
            .get(&(current, role))
            .is_some_and(|targets| targets.contains(&target))
    }

    /// Returns `true` when any role has a configured transition out of
    /// `status`.
    #[must_use]
    pub fn has_outgoing_rules(&self, status: Status) -> bool {
        Role::ALL
            .into_iter()
            .any(|role| self.targets(status, role).next().is_some())
    }

    /// Returns `true` when moving to `target` requires a commit reference.
    #[must_use]
    pub fn requires_commit_id(&self, target: Status) -> bool {
        self.commit_id_targets.contains(&target)
    }

    /// Same as [`Self::requires_commit_id`] for a raw status string.
    ///
    /// Unknown statuses never require a commit reference.
    #[must_use]
    pub fn requires_commit_id_for(&self, target: &str) -> bool {
        match Status::try_from(target) {
            Ok(parsed) => self.requires_commit_id(parsed),
            Err(err) => {
                debug!(%err, "unknown target status requires no commit reference");
                false
            }
        }
    }

    /// Returns `true` when leaving `current` requires a comment.
    ///
    /// The rule depends on the source status alone: `current` must be a
    /// comment-gated status with at least one outgoing transition for some
    /// role. The caller's own role is not consulted and `_target` is not
    /// inspected.
    #[must_use]
    pub fn requires_comment(&self, current: Status, _target: Status) -> bool {
        self.comment_sources.contains(&current) && self.has_outgoing_rules(current)
    }

    /// Same as [`Self::requires_comment`] for raw status strings.
    ///
    /// An unknown source status never requires a comment. The target is not
    /// parsed.
    #[must_use]
    pub fn requires_comment_for(&self, current: &str, target: &str) -> bool {
        let Ok(source) = Status::try_from(current) else {
            debug!(current, target, "unknown source status requires no comment");
            return false;
        };
        // Only the source decides; an unknown target falls back to it.
        let parsed_target = Status::try_from(target).unwrap_or(source);
        self.requires_comment(source, parsed_target)
    }

    /// Returns both requirements for a transition.
    #[must_use]
    pub fn requirements(&self, transition: Transition) -> TransitionRequirement {
        TransitionRequirement {
            commit_id_required: self.requires_commit_id(transition.to),
            comment_required: self.requires_comment(transition.from, transition.to),
        }
    }

    /// Enumerates every (status, role) cell in master order, including cells
    /// that permit nothing.
    pub fn cells(&self) -> impl Iterator<Item = PolicyCell> + '_ {
        Status::ALL.into_iter().flat_map(move |from| {
            Role::ALL.into_iter().map(move |role| PolicyCell {
                from,
                role,
                targets: self.targets(from, role).collect(),
            })
        })
    }

    /// Statuses that require a commit reference when entered.
    pub fn commit_id_targets(&self) -> impl Iterator<Item = Status> + '_ {
        self.commit_id_targets.iter().copied()
    }

    /// Statuses that require a comment when left.
    pub fn comment_sources(&self) -> impl Iterator<Item = Status> + '_ {
        self.comment_sources.iter().copied()
    }
}

impl Default for WorkflowPolicy {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Options for a status selector: the current status first, then every
/// permitted target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChoices {
    current: Status,
    options: Vec<StatusOption>,
}

impl StatusChoices {
    fn new(current: Status, transitions: Vec<StatusOption>) -> Self {
        let mut options = Vec::with_capacity(transitions.len() + 1);
        options.push(current.option());
        options.extend(transitions);
        Self { current, options }
    }

    /// Returns the status the task currently holds.
    #[must_use]
    pub const fn current(&self) -> Status {
        self.current
    }

    /// Returns every selectable option, current status first.
    #[must_use]
    pub fn options(&self) -> &[StatusOption] {
        &self.options
    }

    /// Returns only the options that would change the status.
    #[must_use]
    pub fn transitions(&self) -> &[StatusOption] {
        self.options.get(1..).unwrap_or_default()
    }

    /// Returns `false` when the selector holds at most one option, meaning
    /// no status change is possible.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.options.len() > 1
    }
}
