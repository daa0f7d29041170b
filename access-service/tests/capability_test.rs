use access_service::error::AccessError;
use access_service::models::{Capability, Requester, Role};
use access_service::services::{AuthorizationGuard, Decision, RoleCapabilitySet};
use std::sync::Arc;

/// The role/capability table from the visibility model, used as the oracle
/// for guard decisions.
fn expected(role: Role, capability: Capability) -> bool {
    match role {
        Role::Md => true,
        Role::HrManager => capability != Capability::ManageSettings,
        Role::TeamLead => matches!(
            capability,
            Capability::CreateTasks | Capability::ViewAllReports
        ),
        Role::Employee => false,
    }
}

#[test]
fn authorize_matches_the_capability_table() {
    let registry = Arc::new(RoleCapabilitySet::builtin());
    let guard = AuthorizationGuard::new(registry.clone());

    for role in Role::ALL {
        let requester = Requester::new("1", role);
        for capability in Capability::ALL {
            let allowed = guard.authorize(&requester, capability).is_allow();
            assert_eq!(allowed, expected(role, capability), "{role} / {capability}");
            assert_eq!(
                allowed,
                registry.capabilities_of(role).contains(&capability),
                "guard and registry disagree for {role} / {capability}"
            );
        }
    }
}

#[test]
fn capabilities_of_is_idempotent() {
    let registry = RoleCapabilitySet::builtin();
    for role in Role::ALL {
        assert_eq!(
            registry.capabilities_of(role).clone(),
            registry.capabilities_of(role).clone()
        );
    }
}

#[test]
fn unknown_role_fails_rather_than_defaulting() {
    let registry = RoleCapabilitySet::builtin();
    for bogus in ["CONTRACTOR", "md", "hr_manager", ""] {
        let err = registry.capabilities_for_name(bogus).unwrap_err();
        assert!(
            matches!(err, AccessError::UnknownRole(ref name) if name == bogus),
            "expected UnknownRole for {bogus:?}"
        );
    }
}

#[test]
fn deny_carries_a_readable_reason() {
    let guard = AuthorizationGuard::new(Arc::new(RoleCapabilitySet::builtin()));
    let requester = Requester::new("3", Role::TeamLead);
    match guard.authorize(&requester, Capability::ApproveLeave) {
        Decision::Deny { reason } => {
            assert_eq!(reason, "role 'TEAM_LEAD' lacks capability 'APPROVE_LEAVE'");
        }
        Decision::Allow => panic!("team lead must not approve leave"),
    }
}
