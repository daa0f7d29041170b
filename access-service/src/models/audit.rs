use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EntityKind;

/// Mutations worth an audit trail entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Approve,
    Reject,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
            AuditAction::Approve => "APPROVE",
            AuditAction::Reject => "REJECT",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable "who did what to which entity" entry.
///
/// `seq` is a per-process monotone counter; sink ordering follows the order
/// the triggering mutations were committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: String,
    pub seq: u64,
    pub actor_id: String,
    pub action: AuditAction,
    pub entity_type: EntityKind,
    pub entity_id: String,
    pub timestamp: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl AuditRecord {
    pub fn new(
        seq: u64,
        actor_id: impl Into<String>,
        action: AuditAction,
        entity_type: EntityKind,
        entity_id: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            seq,
            actor_id: actor_id.into(),
            action,
            entity_type,
            entity_id: entity_id.into(),
            timestamp: Utc::now(),
            details,
        }
    }
}
