//! The tracker's standard workflow table.

use crate::workflow::domain::{Role, Status};
use std::sync::LazyLock;

use super::WorkflowPolicy;

static STANDARD: LazyLock<WorkflowPolicy> = LazyLock::new(standard_policy);

impl WorkflowPolicy {
    /// Returns the process-wide standard policy.
    ///
    /// | Current status | Roles | Targets |
    /// |---|---|---|
    /// | `BACKLOG` | `TEAM_MEMBER` | `CODE_REVIEW`, `DEVELOPMENT` |
    /// | `DEVELOPMENT` | `TEAM_MEMBER` | `CODE_REVIEW`, `BACKLOG` |
    /// | `CODE_REVIEW` | `MANAGER`, `TEAMLEAD`, `BUSINESS_ANALYST` | `DEVELOPMENT`, `UAT_TESTING` |
    /// | `UAT_TESTING` | `TESTER`, `QA_MANAGER` | `PREPROD`, `UAT_FAILED` |
    /// | `SIT_FAILED` | `DEVELOPER` | `DEVELOPMENT` |
    /// | `UAT_FAILED` | `DEVELOPER` | `DEVELOPMENT` |
    /// | `REOPENED` | `DEVELOPER` | `DEVELOPMENT` |
    /// | `PREPROD` | `MANAGER`, `ADMIN` | `PROD` |
    ///
    /// Entering `UAT_TESTING` or `PREPROD` requires a commit reference;
    /// leaving `CODE_REVIEW` requires a comment.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }
}

fn standard_policy() -> WorkflowPolicy {
    WorkflowPolicy::builder()
        .allow(
            Status::Backlog,
            [Role::TeamMember],
            [Status::CodeReview, Status::Development],
        )
        .allow(
            Status::Development,
            [Role::TeamMember],
            [Status::CodeReview, Status::Backlog],
        )
        .allow(
            Status::CodeReview,
            [Role::Manager, Role::TeamLead, Role::BusinessAnalyst],
            [Status::Development, Status::UatTesting],
        )
        .allow(
            Status::UatTesting,
            [Role::Tester, Role::QaManager],
            [Status::Preprod, Status::UatFailed],
        )
        .allow(Status::SitFailed, [Role::Developer], [Status::Development])
        .allow(Status::UatFailed, [Role::Developer], [Status::Development])
        .allow(Status::Reopened, [Role::Developer], [Status::Development])
        .allow(Status::Preprod, [Role::Manager, Role::Admin], [Status::Prod])
        .require_commit_id_for([Status::UatTesting, Status::Preprod])
        .require_comment_from([Status::CodeReview])
        .build()
}
