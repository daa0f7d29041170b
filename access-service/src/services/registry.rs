//! Role registry: the fixed role → capability mapping.
//!
//! Built once at process start and injected wherever authorization decisions
//! are made; never mutated at runtime.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::error::AccessError;
use crate::models::{Capability, Role};

/// Immutable mapping from role to the capabilities it grants.
#[derive(Debug, Clone)]
pub struct RoleCapabilitySet {
    grants: BTreeMap<Role, BTreeSet<Capability>>,
    empty: BTreeSet<Capability>,
}

impl RoleCapabilitySet {
    /// The built-in Profitcast mapping.
    ///
    /// MD holds everything; HR_MANAGER everything except settings; TEAM_LEAD
    /// only task creation and reporting; EMPLOYEE nothing.
    pub fn builtin() -> Self {
        let mut grants = BTreeMap::new();
        grants.insert(Role::Md, Capability::ALL.into_iter().collect());
        grants.insert(
            Role::HrManager,
            [
                Capability::ManageUsers,
                Capability::ManageProjects,
                Capability::CreateTasks,
                Capability::ViewAllReports,
                Capability::ApproveLeave,
            ]
            .into_iter()
            .collect(),
        );
        grants.insert(
            Role::TeamLead,
            [Capability::CreateTasks, Capability::ViewAllReports]
                .into_iter()
                .collect(),
        );
        grants.insert(Role::Employee, BTreeSet::new());
        Self {
            grants,
            empty: BTreeSet::new(),
        }
    }

    /// Capabilities granted to `role`. Total over the `Role` enum.
    pub fn capabilities_of(&self, role: Role) -> &BTreeSet<Capability> {
        self.grants.get(&role).unwrap_or(&self.empty)
    }

    /// Like [`capabilities_of`](Self::capabilities_of), but for roles that
    /// arrive as raw strings from storage. Fails `UnknownRole` for anything
    /// outside the four defined names.
    pub fn capabilities_for_name(&self, name: &str) -> Result<&BTreeSet<Capability>, AccessError> {
        let role = Role::from_str(name)?;
        Ok(self.capabilities_of(role))
    }

    pub fn role_allows(&self, role: Role, capability: Capability) -> bool {
        self.capabilities_of(role).contains(&capability)
    }
}

impl Default for RoleCapabilitySet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md_holds_every_capability() {
        let registry = RoleCapabilitySet::builtin();
        for cap in Capability::ALL {
            assert!(registry.role_allows(Role::Md, cap), "MD missing {cap}");
        }
    }

    #[test]
    fn hr_manager_lacks_only_settings() {
        let registry = RoleCapabilitySet::builtin();
        assert!(!registry.role_allows(Role::HrManager, Capability::ManageSettings));
        for cap in [
            Capability::ManageUsers,
            Capability::ManageProjects,
            Capability::CreateTasks,
            Capability::ViewAllReports,
            Capability::ApproveLeave,
        ] {
            assert!(registry.role_allows(Role::HrManager, cap));
        }
    }

    #[test]
    fn team_lead_grants() {
        let registry = RoleCapabilitySet::builtin();
        assert!(registry.role_allows(Role::TeamLead, Capability::CreateTasks));
        assert!(registry.role_allows(Role::TeamLead, Capability::ViewAllReports));
        assert!(!registry.role_allows(Role::TeamLead, Capability::ApproveLeave));
        assert!(!registry.role_allows(Role::TeamLead, Capability::ManageUsers));
        assert!(!registry.role_allows(Role::TeamLead, Capability::ManageProjects));
        assert!(!registry.role_allows(Role::TeamLead, Capability::ManageSettings));
    }

    #[test]
    fn employee_has_empty_set() {
        let registry = RoleCapabilitySet::builtin();
        assert!(registry.capabilities_of(Role::Employee).is_empty());
    }

    #[test]
    fn lookup_is_idempotent() {
        let registry = RoleCapabilitySet::builtin();
        let first = registry.capabilities_of(Role::TeamLead).clone();
        let second = registry.capabilities_of(Role::TeamLead).clone();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_role_name_is_rejected() {
        let registry = RoleCapabilitySet::builtin();
        let err = registry.capabilities_for_name("INTERN").unwrap_err();
        assert!(matches!(err, AccessError::UnknownRole(name) if name == "INTERN"));
    }
}
