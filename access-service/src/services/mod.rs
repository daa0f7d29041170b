//! Services layer for the Profitcast access core.
//!
//! Each service is request-scoped and stateless between requests; the only
//! shared state is the immutable role registry and the audit sequence counter.

mod audit;
mod guard;
mod identity;
mod jwt;
mod leave;
mod registry;
mod scope;

pub use audit::{AuditRecorder, AuditSink, MemoryAuditSink};
pub use guard::{AuthorizationGuard, Decision};
pub use identity::{
    AccountStore, CredentialVerifier, IdentityResolver, MemoryAccountStore, VerifiedCredential,
    VerifyError,
};
pub use jwt::{JwtVerifier, SessionClaims};
pub use leave::{LeaveService, LeaveStore, MemoryLeaveStore};
pub use registry::RoleCapabilitySet;
pub use scope::{scope_for, Field, Predicate, Scoped};
