//! Functional roles of acting users.

use super::ParseRoleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Functional classification of the user requesting a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// General contributor on the team.
    TeamMember,
    /// Software developer.
    Developer,
    /// Quality assurance tester.
    Tester,
    /// Delivery manager.
    Manager,
    /// Technical team lead.
    #[serde(rename = "TEAMLEAD")]
    TeamLead,
    /// Business analyst.
    BusinessAnalyst,
    /// Quality assurance manager.
    QaManager,
    /// Administrator.
    Admin,
}

impl Role {
    /// Every known role.
    pub const ALL: [Self; 8] = [
        Self::TeamMember,
        Self::Developer,
        Self::Tester,
        Self::Manager,
        Self::TeamLead,
        Self::BusinessAnalyst,
        Self::QaManager,
        Self::Admin,
    ];

    /// Returns the stable machine value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TeamMember => "TEAM_MEMBER",
            Self::Developer => "DEVELOPER",
            Self::Tester => "TESTER",
            Self::Manager => "MANAGER",
            Self::TeamLead => "TEAMLEAD",
            Self::BusinessAnalyst => "BUSINESS_ANALYST",
            Self::QaManager => "QA_MANAGER",
            Self::Admin => "ADMIN",
        }
    }

    /// Returns the human display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TeamMember => "Team Member",
            Self::Developer => "Developer",
            Self::Tester => "Tester",
            Self::Manager => "Manager",
            Self::TeamLead => "Team Lead",
            Self::BusinessAnalyst => "Business Analyst",
            Self::QaManager => "QA Manager",
            Self::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| ParseRoleError(value.to_owned()))
    }
}
