//! access-service: role-scoped data visibility and authorization core for
//! Profitcast.
//!
//! The request flow is: credential → [`services::IdentityResolver`] produces
//! a [`models::Requester`] → [`services::AuthorizationGuard`] checks the
//! coarse-grained capability → [`services::scope_for`] narrows reads and
//! writes to the rows the requester may touch → [`services::AuditRecorder`]
//! logs the resulting mutation. Storage and transport live behind
//! collaborator traits; this crate never produces an HTTP status.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

use std::sync::Arc;

pub use error::AccessError;

use services::{
    AccountStore, AuditRecorder, AuditSink, AuthorizationGuard, CredentialVerifier,
    IdentityResolver, LeaveService, LeaveStore, RoleCapabilitySet,
};

/// Shared, request-independent state: the immutable role registry plus the
/// services wired to their collaborators.
#[derive(Clone)]
pub struct AccessState {
    pub registry: Arc<RoleCapabilitySet>,
    pub guard: AuthorizationGuard,
    pub identity: Arc<IdentityResolver>,
    pub leaves: Arc<LeaveService>,
    pub audit: Arc<AuditRecorder>,
}

impl AccessState {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        accounts: Arc<dyn AccountStore>,
        leave_store: Arc<dyn LeaveStore>,
        audit_sink: Arc<dyn AuditSink>,
    ) -> Self {
        let registry = Arc::new(RoleCapabilitySet::builtin());
        let guard = AuthorizationGuard::new(registry.clone());
        let audit = Arc::new(AuditRecorder::new(audit_sink));
        let identity = Arc::new(IdentityResolver::new(verifier, accounts));
        let leaves = Arc::new(LeaveService::new(leave_store, guard.clone(), audit.clone()));

        Self {
            registry,
            guard,
            identity,
            leaves,
            audit,
        }
    }
}
