use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Entity types subject to visibility scoping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Project,
    Task,
    Leave,
    Timesheet,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Project => "Project",
            EntityKind::Task => "Task",
            EntityKind::Leave => "Leave",
            EntityKind::Timesheet => "Timesheet",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project scoping fields: owner plus a flat member set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRow {
    pub id: String,
    pub owner_id: String,
    pub member_ids: Vec<String>,
}

/// Task scoping fields. Unassigned tasks are invisible to employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: String,
    pub assignee_id: Option<String>,
}

/// Timesheet scoping fields plus the entry basics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRow {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub hours: f64,
}
