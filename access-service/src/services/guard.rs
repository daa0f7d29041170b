//! Request-level capability enforcement.

use std::sync::Arc;

use crate::error::AccessError;
use crate::models::{Capability, Requester};

use super::RoleCapabilitySet;

/// Outcome of a coarse-grained authorization check.
///
/// The core never produces a transport status; the denial reason is plain
/// text for the boundary layer to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: String },
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Checks that a requester's role grants a required capability.
#[derive(Clone)]
pub struct AuthorizationGuard {
    registry: Arc<RoleCapabilitySet>,
}

impl AuthorizationGuard {
    pub fn new(registry: Arc<RoleCapabilitySet>) -> Self {
        Self { registry }
    }

    /// Pure, deterministic allow/deny. No I/O.
    pub fn authorize(&self, requester: &Requester, capability: Capability) -> Decision {
        if self.registry.role_allows(requester.role, capability) {
            Decision::Allow
        } else {
            Decision::Deny {
                reason: format!(
                    "role '{}' lacks capability '{}'",
                    requester.role, capability
                ),
            }
        }
    }

    /// `?`-friendly form of [`authorize`](Self::authorize).
    pub fn require(&self, requester: &Requester, capability: Capability) -> Result<(), AccessError> {
        match self.authorize(requester, capability) {
            Decision::Allow => Ok(()),
            Decision::Deny { .. } => {
                tracing::warn!(
                    requester_id = %requester.id,
                    role = %requester.role,
                    capability = %capability,
                    "permission denied: missing capability"
                );
                Err(AccessError::CapabilityDenied {
                    role: requester.role,
                    capability,
                })
            }
        }
    }
}
