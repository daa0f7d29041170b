//! Domain models for the access-control core.
//!
//! Entity rows carry only the scoping fields this core reads; the records
//! themselves are owned and persisted by the storage collaborator.

mod audit;
mod entity;
mod leave;
mod role;

pub use audit::{AuditAction, AuditRecord};
pub use entity::{EntityKind, ProjectRow, TaskRow, TimesheetRow};
pub use leave::{LeaveDecision, LeaveDraft, LeaveKind, LeaveRecord, LeaveStatus};
pub use role::{Account, Capability, Requester, Role};
