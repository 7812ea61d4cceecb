//! Programmatic construction of policy tables.

use crate::workflow::domain::{Role, Status};
use std::collections::{BTreeMap, BTreeSet};

use super::WorkflowPolicy;

/// Builder for [`WorkflowPolicy`].
///
/// Repeated [`allow`](Self::allow) calls for the same (status, role) cell
/// merge their targets.
#[derive(Debug, Clone, Default)]
pub struct WorkflowPolicyBuilder {
    rules: BTreeMap<(Status, Role), BTreeSet<Status>>,
    commit_id_targets: BTreeSet<Status>,
    comment_sources: BTreeSet<Status>,
}

impl WorkflowPolicyBuilder {
    /// Permits each of `roles` to move a task from `from` to each of
    /// `targets`.
    #[must_use]
    pub fn allow(
        mut self,
        from: Status,
        roles: impl IntoIterator<Item = Role>,
        targets: impl IntoIterator<Item = Status>,
    ) -> Self {
        let target_set: BTreeSet<Status> = targets.into_iter().collect();
        if target_set.is_empty() {
            return self;
        }
        for role in roles {
            self.rules
                .entry((from, role))
                .or_default()
                .extend(target_set.iter().copied());
        }
        self
    }

    /// Marks `targets` as statuses that need a commit reference.
    #[must_use]
    pub fn require_commit_id_for(mut self, targets: impl IntoIterator<Item = Status>) -> Self {
        self.commit_id_targets.extend(targets);
        self
    }

    /// Marks `sources` as statuses that need a comment when left.
    #[must_use]
    pub fn require_comment_from(mut self, sources: impl IntoIterator<Item = Status>) -> Self {
        self.comment_sources.extend(sources);
        self
    }

    /// Freezes the table.
    #[must_use]
    pub fn build(self) -> WorkflowPolicy {
        WorkflowPolicy {
            rules: self.rules,
            commit_id_targets: self.commit_id_targets,
            comment_sources: self.comment_sources,
        }
    }
}
