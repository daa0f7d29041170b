//! Append-only audit trail.
//!
//! Recording is best-effort: a sink failure is logged and never fails or
//! rolls back the triggering mutation. Records carry a per-process sequence
//! number so sink ordering follows commit ordering.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::models::{AuditAction, AuditRecord, EntityKind};

/// Audit persistence collaborator.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn append(&self, record: &AuditRecord) -> Result<(), anyhow::Error>;
}

/// Appends one immutable record per mutation.
pub struct AuditRecorder {
    sink: Arc<dyn AuditSink>,
    seq: AtomicU64,
}

impl AuditRecorder {
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self {
            sink,
            seq: AtomicU64::new(0),
        }
    }

    /// Record who did what to which entity. Never fails the caller.
    pub async fn record(
        &self,
        actor_id: &str,
        action: AuditAction,
        entity_type: EntityKind,
        entity_id: &str,
        details: serde_json::Value,
    ) {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let record = AuditRecord::new(seq, actor_id, action, entity_type, entity_id, details);

        if let Err(e) = self.sink.append(&record).await {
            tracing::warn!(
                error = %e,
                seq,
                actor_id = %record.actor_id,
                action = %record.action,
                entity_type = %record.entity_type,
                entity_id = %record.entity_id,
                "audit sink unavailable; record dropped"
            );
        }
    }
}

/// In-memory audit sink for tests and local development.
#[derive(Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn append(&self, record: &AuditRecord) -> Result<(), anyhow::Error> {
        self.records
            .lock()
            .map_err(|e| anyhow::anyhow!("audit sink mutex poisoned: {}", e))?
            .push(record.clone());
        Ok(())
    }
}
