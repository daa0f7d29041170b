use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// The four roles defined by the Profitcast organization model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Md,
    HrManager,
    TeamLead,
    Employee,
}

impl Role {
    /// All roles, in privilege order. Useful for exhaustive checks.
    pub const ALL: [Role; 4] = [Role::Md, Role::HrManager, Role::TeamLead, Role::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Md => "MD",
            Role::HrManager => "HR_MANAGER",
            Role::TeamLead => "TEAM_LEAD",
            Role::Employee => "EMPLOYEE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MD" => Ok(Role::Md),
            "HR_MANAGER" => Ok(Role::HrManager),
            "TEAM_LEAD" => Ok(Role::TeamLead),
            "EMPLOYEE" => Ok(Role::Employee),
            other => Err(AccessError::UnknownRole(other.to_string())),
        }
    }
}

/// A named permission a role may or may not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    ManageUsers,
    ManageProjects,
    CreateTasks,
    ViewAllReports,
    ApproveLeave,
    ManageSettings,
}

impl Capability {
    pub const ALL: [Capability; 6] = [
        Capability::ManageUsers,
        Capability::ManageProjects,
        Capability::CreateTasks,
        Capability::ViewAllReports,
        Capability::ApproveLeave,
        Capability::ManageSettings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ManageUsers => "MANAGE_USERS",
            Capability::ManageProjects => "MANAGE_PROJECTS",
            Capability::CreateTasks => "CREATE_TASKS",
            Capability::ViewAllReports => "VIEW_ALL_REPORTS",
            Capability::ApproveLeave => "APPROVE_LEAVE",
            Capability::ManageSettings => "MANAGE_SETTINGS",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity attempting an operation.
///
/// Reconstructed per request by the identity resolver and discarded at
/// request end; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub id: String,
    pub role: Role,
}

impl Requester {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self { id: id.into(), role }
    }
}

/// Account record as returned by the account-store collaborator.
///
/// The role arrives as a raw string and is parsed during resolution; a value
/// outside the four defined roles indicates a broken invariant upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub role: String,
    pub is_active: bool,
}
