#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use access_service::models::{
    Account, LeaveDraft, LeaveKind, LeaveRecord, LeaveStatus, Requester, Role,
};
use access_service::services::{
    CredentialVerifier, MemoryAccountStore, MemoryAuditSink, MemoryLeaveStore, VerifiedCredential,
    VerifyError,
};
use access_service::AccessState;

/// Verifier that rejects everything; for tests that build requesters
/// directly instead of resolving credentials.
pub struct NullVerifier;

#[async_trait]
impl CredentialVerifier for NullVerifier {
    async fn verify(&self, _credential: &str) -> Result<VerifiedCredential, VerifyError> {
        Err(VerifyError::Invalid)
    }
}

pub struct Harness {
    pub state: AccessState,
    pub accounts: Arc<MemoryAccountStore>,
    pub leave_store: Arc<MemoryLeaveStore>,
    pub audit_sink: Arc<MemoryAuditSink>,
}

pub fn harness() -> Harness {
    let accounts = Arc::new(MemoryAccountStore::new());
    let leave_store = Arc::new(MemoryLeaveStore::new());
    let audit_sink = Arc::new(MemoryAuditSink::new());

    let state = AccessState::new(
        Arc::new(NullVerifier),
        accounts.clone(),
        leave_store.clone(),
        audit_sink.clone(),
    );

    Harness {
        state,
        accounts,
        leave_store,
        audit_sink,
    }
}

pub fn requester(id: &str, role: Role) -> Requester {
    Requester::new(id, role)
}

pub fn account(id: &str, role: &str, is_active: bool) -> Account {
    Account {
        id: id.to_string(),
        role: role.to_string(),
        is_active,
    }
}

pub fn draft() -> LeaveDraft {
    LeaveDraft {
        kind: LeaveKind::Annual,
        start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 9, 5).unwrap(),
        reason: "family trip".to_string(),
    }
}

/// A pending leave record with a fixed id, seeded straight into the store.
pub fn pending_leave(id: &str, user_id: &str) -> LeaveRecord {
    let mut record = LeaveRecord::new(user_id, draft());
    record.id = id.to_string();
    record
}

pub fn leave_with_status(id: &str, user_id: &str, status: LeaveStatus) -> LeaveRecord {
    let mut record = pending_leave(id, user_id);
    record.status = status;
    record
}
