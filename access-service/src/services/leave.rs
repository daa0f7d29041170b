//! Guarded leave workflow: apply, approve/reject, cancel.
//!
//! Every read and write goes through the requester's Leave predicate first;
//! a row the predicate rejects reads as `NotFound`. Ownership and the
//! PENDING-only rules are enforced after visibility, so record existence is
//! only revealed to requesters who may see the record anyway.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use crate::error::AccessError;
use crate::models::{
    AuditAction, Capability, EntityKind, LeaveDecision, LeaveDraft, LeaveRecord, LeaveStatus,
    Requester,
};

use super::scope::scope_for;
use super::{AuditRecorder, AuthorizationGuard};

/// Leave persistence collaborator.
#[async_trait]
pub trait LeaveStore: Send + Sync {
    async fn find_leave(&self, leave_id: &str) -> Result<Option<LeaveRecord>, anyhow::Error>;
    async fn insert_leave(&self, record: &LeaveRecord) -> Result<(), anyhow::Error>;
    async fn update_leave(&self, record: &LeaveRecord) -> Result<(), anyhow::Error>;
    async fn delete_leave(&self, leave_id: &str) -> Result<(), anyhow::Error>;
}

/// Leave request operations, scoped and capability-guarded.
pub struct LeaveService {
    store: Arc<dyn LeaveStore>,
    guard: AuthorizationGuard,
    audit: Arc<AuditRecorder>,
}

impl LeaveService {
    pub fn new(
        store: Arc<dyn LeaveStore>,
        guard: AuthorizationGuard,
        audit: Arc<AuditRecorder>,
    ) -> Self {
        Self {
            store,
            guard,
            audit,
        }
    }

    /// Apply for leave. The record is always owned by the requester and
    /// starts PENDING, regardless of what the draft claims.
    pub async fn submit(
        &self,
        requester: &Requester,
        draft: LeaveDraft,
    ) -> Result<LeaveRecord, AccessError> {
        let record = LeaveRecord::new(requester.id.clone(), draft);
        self.store
            .insert_leave(&record)
            .await
            .map_err(AccessError::Unavailable)?;

        self.audit
            .record(
                &requester.id,
                AuditAction::Create,
                EntityKind::Leave,
                &record.id,
                json!({ "kind": record.kind, "start_date": record.start_date, "end_date": record.end_date }),
            )
            .await;

        Ok(record)
    }

    /// Fetch one leave record through the requester's predicate.
    pub async fn get(
        &self,
        requester: &Requester,
        leave_id: &str,
    ) -> Result<LeaveRecord, AccessError> {
        self.load_scoped(requester, leave_id).await
    }

    /// Approve or reject a pending request. Requires `APPROVE_LEAVE`.
    pub async fn decide(
        &self,
        requester: &Requester,
        leave_id: &str,
        decision: LeaveDecision,
        comments: Option<String>,
    ) -> Result<LeaveRecord, AccessError> {
        self.guard.require(requester, Capability::ApproveLeave)?;

        let mut record = self.load_scoped(requester, leave_id).await?;
        record.status = record.status.apply(decision)?;
        record.approver_id = Some(requester.id.clone());
        record.approved_at = Some(Utc::now());
        record.comments = comments;

        self.store
            .update_leave(&record)
            .await
            .map_err(AccessError::Unavailable)?;

        let action = match decision {
            LeaveDecision::Approve => AuditAction::Approve,
            LeaveDecision::Reject => AuditAction::Reject,
        };
        self.audit
            .record(
                &requester.id,
                action,
                EntityKind::Leave,
                &record.id,
                json!({ "status": record.status }),
            )
            .await;

        Ok(record)
    }

    /// Cancel (delete) a leave request. Legal only for the owning user and
    /// only while the request is still PENDING.
    pub async fn cancel(&self, requester: &Requester, leave_id: &str) -> Result<(), AccessError> {
        let record = self.load_scoped(requester, leave_id).await?;

        if record.user_id != requester.id || record.status != LeaveStatus::Pending {
            return Err(AccessError::IllegalDelete {
                status: record.status,
            });
        }

        self.store
            .delete_leave(leave_id)
            .await
            .map_err(AccessError::Unavailable)?;

        self.audit
            .record(
                &requester.id,
                AuditAction::Delete,
                EntityKind::Leave,
                leave_id,
                json!({ "status": record.status }),
            )
            .await;

        Ok(())
    }

    async fn load_scoped(
        &self,
        requester: &Requester,
        leave_id: &str,
    ) -> Result<LeaveRecord, AccessError> {
        let record = self
            .store
            .find_leave(leave_id)
            .await
            .map_err(AccessError::Unavailable)?
            .ok_or(AccessError::NotFound)?;

        scope_for(requester, EntityKind::Leave).check(&record)?;
        Ok(record)
    }
}

/// In-memory leave store for tests and local development.
#[derive(Default)]
pub struct MemoryLeaveStore {
    leaves: Mutex<HashMap<String, LeaveRecord>>,
}

impl MemoryLeaveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, bypassing the workflow.
    pub fn seed(&self, record: LeaveRecord) {
        if let Ok(mut leaves) = self.leaves.lock() {
            leaves.insert(record.id.clone(), record);
        }
    }
}

#[async_trait]
impl LeaveStore for MemoryLeaveStore {
    async fn find_leave(&self, leave_id: &str) -> Result<Option<LeaveRecord>, anyhow::Error> {
        let leaves = self
            .leaves
            .lock()
            .map_err(|e| anyhow::anyhow!("leave store mutex poisoned: {}", e))?;
        Ok(leaves.get(leave_id).cloned())
    }

    async fn insert_leave(&self, record: &LeaveRecord) -> Result<(), anyhow::Error> {
        self.leaves
            .lock()
            .map_err(|e| anyhow::anyhow!("leave store mutex poisoned: {}", e))?
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn update_leave(&self, record: &LeaveRecord) -> Result<(), anyhow::Error> {
        self.leaves
            .lock()
            .map_err(|e| anyhow::anyhow!("leave store mutex poisoned: {}", e))?
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn delete_leave(&self, leave_id: &str) -> Result<(), anyhow::Error> {
        self.leaves
            .lock()
            .map_err(|e| anyhow::anyhow!("leave store mutex poisoned: {}", e))?
            .remove(leave_id);
        Ok(())
    }
}
