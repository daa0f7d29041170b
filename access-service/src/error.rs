use thiserror::Error;

use crate::models::{Capability, LeaveDecision, LeaveStatus, Role};

/// Failure taxonomy of the access-control core.
///
/// None of these are retried internally. The API boundary owns the mapping
/// to transport status codes; this core only distinguishes terminal failures
/// from transient ones via [`AccessError::is_retryable`].
#[derive(Debug, Error)]
pub enum AccessError {
    /// Credential failed verification or referenced no known account.
    #[error("Invalid credential")]
    InvalidCredential,

    /// Credential was valid once but has expired.
    #[error("Credential expired")]
    ExpiredCredential,

    /// The referenced account exists but is deactivated.
    #[error("Account is inactive")]
    InactiveAccount,

    /// Coarse-grained authorization failure.
    #[error("role '{role}' lacks capability '{capability}'")]
    CapabilityDenied { role: Role, capability: Capability },

    /// Predicate mismatch, deliberately indistinguishable from
    /// "does not exist" so record existence never leaks.
    #[error("Not found")]
    NotFound,

    /// Leave state machine violation.
    #[error("cannot {attempted} a leave in status {from}")]
    InvalidTransition {
        from: LeaveStatus,
        attempted: LeaveDecision,
    },

    /// Leave deletion attempted by a non-owner or outside PENDING.
    #[error("cannot delete a leave in status {status}")]
    IllegalDelete { status: LeaveStatus },

    /// A role outside the four defined ones reached this core. Indicates a
    /// broken invariant upstream, not normal control flow.
    #[error("Unknown role '{0}'")]
    UnknownRole(String),

    /// A collaborator (account store, entity store, audit sink) failed
    /// transiently. The only retryable variant; never a definitive denial.
    #[error("Collaborator unavailable: {0}")]
    Unavailable(anyhow::Error),
}

impl AccessError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, AccessError::Unavailable(_))
    }
}
