use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AccessError;

/// Leave request lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "PENDING",
            LeaveStatus::Approved => "APPROVED",
            LeaveStatus::Rejected => "REJECTED",
        }
    }

    /// Apply an approver decision.
    ///
    /// `Pending` is the only state with outgoing transitions; anything else
    /// fails with the current and attempted state.
    pub fn apply(self, decision: LeaveDecision) -> Result<LeaveStatus, AccessError> {
        match self {
            LeaveStatus::Pending => Ok(match decision {
                LeaveDecision::Approve => LeaveStatus::Approved,
                LeaveDecision::Reject => LeaveStatus::Rejected,
            }),
            from => Err(AccessError::InvalidTransition {
                from,
                attempted: decision,
            }),
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two legal decisions on a pending leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveDecision {
    Approve,
    Reject,
}

impl fmt::Display for LeaveDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LeaveDecision::Approve => "APPROVE",
            LeaveDecision::Reject => "REJECT",
        })
    }
}

/// Leave categories offered to employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveKind {
    Annual,
    Sick,
    Emergency,
    Maternity,
    Paternity,
    Unpaid,
}

/// A leave request row as read from, and written back to, the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub id: String,
    pub user_id: String,
    pub kind: LeaveKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub approver_id: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub comments: Option<String>,
}

impl LeaveRecord {
    /// Build a fresh pending request owned by `user_id`.
    pub fn new(user_id: impl Into<String>, draft: LeaveDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            kind: draft.kind,
            start_date: draft.start_date,
            end_date: draft.end_date,
            reason: draft.reason,
            status: LeaveStatus::Pending,
            approver_id: None,
            approved_at: None,
            comments: None,
        }
    }
}

/// Fields an employee supplies when applying for leave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDraft {
    pub kind: LeaveKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}
