//! Serialized form of a policy table.

use crate::workflow::domain::{Role, Status};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

use super::WorkflowPolicy;

/// Errors returned while loading a policy document.
#[derive(Debug, Error)]
pub enum PolicyConfigError {
    /// The document is not valid JSON, names an unknown status or role, or
    /// carries unknown fields.
    #[error("malformed policy document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A rule lists no roles.
    #[error("rule for {from} names no roles")]
    EmptyRoles {
        /// Source status of the offending rule.
        from: Status,
    },

    /// Two rules declare the same (status, role) cell.
    #[error("duplicate rule for {from} and role {role}")]
    DuplicateRule {
        /// Source status of the repeated cell.
        from: Status,
        /// Role of the repeated cell.
        role: Role,
    },
}

/// A single rule: `roles` may move a task from `from` to any of `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyRule {
    /// Source status.
    pub from: Status,
    /// Roles the rule applies to.
    pub roles: Vec<Role>,
    /// Permitted targets.
    pub to: Vec<Status>,
}

/// Serializable policy table.
///
/// # Examples
///
/// ```
/// use taskflow::workflow::domain::{Role, Status};
/// use taskflow::workflow::policy::WorkflowPolicy;
///
/// let policy = WorkflowPolicy::from_json(
///     r#"{
///         "rules": [
///             { "from": "BLOCKED", "roles": ["ADMIN"], "to": ["DEVELOPMENT"] }
///         ],
///         "commit_id_required_for": ["PROD"]
///     }"#,
/// )
/// .expect("valid policy document");
///
/// assert!(policy.permits(Status::Blocked, Status::Development, Role::Admin));
/// assert!(policy.requires_commit_id(Status::Prod));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyDocument {
    /// Transition rules.
    pub rules: Vec<PolicyRule>,
    /// Target statuses that need a commit reference.
    #[serde(default)]
    pub commit_id_required_for: Vec<Status>,
    /// Source statuses that need a comment when left.
    #[serde(default)]
    pub comment_required_from: Vec<Status>,
}

impl WorkflowPolicy {
    /// Parses a JSON policy document and builds the table.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyConfigError`] when the document is malformed or its
    /// rules conflict.
    pub fn from_json(json: &str) -> Result<Self, PolicyConfigError> {
        let document: PolicyDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Builds the table described by `document`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyConfigError::EmptyRoles`] for a rule without roles and
    /// [`PolicyConfigError::DuplicateRule`] when a (status, role) cell is
    /// declared twice, including by a rule with no targets or by a role
    /// repeated within one rule.
    pub fn from_document(document: PolicyDocument) -> Result<Self, PolicyConfigError> {
        let mut builder = Self::builder();
        let mut declared: BTreeSet<(Status, Role)> = BTreeSet::new();
        for rule in document.rules {
            if rule.roles.is_empty() {
                return Err(PolicyConfigError::EmptyRoles { from: rule.from });
            }
            if let Some(role) = rule
                .roles
                .iter()
                .copied()
                .find(|role| !declared.insert((rule.from, *role)))
            {
                return Err(PolicyConfigError::DuplicateRule {
                    from: rule.from,
                    role,
                });
            }
            builder = builder.allow(rule.from, rule.roles, rule.to);
        }
        Ok(builder
            .require_commit_id_for(document.commit_id_required_for)
            .require_comment_from(document.comment_required_from)
            .build())
    }

    /// Exports the table with one rule per non-empty cell, in master order.
    #[must_use]
    pub fn to_document(&self) -> PolicyDocument {
        let rules = self
            .cells()
            .filter(|cell| !cell.targets.is_empty())
            .map(|cell| PolicyRule {
                from: cell.from,
                roles: vec![cell.role],
                to: cell.targets,
            })
            .collect();
        PolicyDocument {
            rules,
            commit_id_required_for: self.commit_id_targets().collect(),
            comment_required_from: self.comment_sources().collect(),
        }
    }
}
