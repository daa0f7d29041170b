//! Visibility filter: per-entity access predicates.
//!
//! A [`Predicate`] is a storage-independent condition tree. The entity store
//! translates it into its native query form; the core can also evaluate it
//! directly against loaded rows, and must do so identically on read and
//! write paths. A row the predicate rejects reads as `NotFound`, never as a
//! forbidden-but-present record.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::models::{EntityKind, LeaveRecord, ProjectRow, Requester, Role, TaskRow, TimesheetRow};

/// Scoping fields a predicate may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    OwnerId,
    Members,
    AssigneeId,
    UserId,
}

/// Composable visibility condition over an entity's scoping fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Admits every row.
    All,
    /// Scalar field equals the given id.
    Eq(Field, String),
    /// Set-valued field contains the given id.
    Contains(Field, String),
    /// At least one branch admits.
    AnyOf(Vec<Predicate>),
    /// Every branch admits.
    AllOf(Vec<Predicate>),
}

/// Read access to an entity's scoping fields.
///
/// Fields an entity does not carry default to absent/empty, which no `Eq` or
/// `Contains` condition admits.
pub trait Scoped {
    fn scalar(&self, field: Field) -> Option<&str> {
        let _ = field;
        None
    }

    fn set(&self, field: Field) -> &[String] {
        let _ = field;
        &[]
    }
}

impl Predicate {
    pub fn admits<T: Scoped>(&self, row: &T) -> bool {
        match self {
            Predicate::All => true,
            Predicate::Eq(field, id) => row.scalar(*field) == Some(id.as_str()),
            Predicate::Contains(field, id) => row.set(*field).iter().any(|member| member == id),
            Predicate::AnyOf(branches) => branches.iter().any(|p| p.admits(row)),
            Predicate::AllOf(branches) => branches.iter().all(|p| p.admits(row)),
        }
    }

    /// Write-path form: a rejected row is reported as `NotFound`.
    pub fn check<T: Scoped>(&self, row: &T) -> Result<(), AccessError> {
        if self.admits(row) {
            Ok(())
        } else {
            Err(AccessError::NotFound)
        }
    }

    /// Read-path form: keep only admitted rows.
    pub fn filter<T: Scoped>(&self, rows: Vec<T>) -> Vec<T> {
        rows.into_iter().filter(|row| self.admits(row)).collect()
    }
}

/// The access predicate restricting which rows `requester` may see or mutate.
pub fn scope_for(requester: &Requester, entity: EntityKind) -> Predicate {
    let own = |field: Field| Predicate::Eq(field, requester.id.clone());

    match requester.role {
        Role::Md | Role::HrManager => Predicate::All,
        Role::TeamLead => match entity {
            EntityKind::Project => owner_or_member(&requester.id),
            EntityKind::Task => Predicate::All,
            EntityKind::Leave | EntityKind::Timesheet => own(Field::UserId),
        },
        Role::Employee => match entity {
            EntityKind::Project => owner_or_member(&requester.id),
            EntityKind::Task => own(Field::AssigneeId),
            EntityKind::Leave | EntityKind::Timesheet => own(Field::UserId),
        },
    }
}

fn owner_or_member(id: &str) -> Predicate {
    Predicate::AnyOf(vec![
        Predicate::Eq(Field::OwnerId, id.to_string()),
        Predicate::Contains(Field::Members, id.to_string()),
    ])
}

impl Scoped for ProjectRow {
    fn scalar(&self, field: Field) -> Option<&str> {
        match field {
            Field::OwnerId => Some(&self.owner_id),
            _ => None,
        }
    }

    fn set(&self, field: Field) -> &[String] {
        match field {
            Field::Members => &self.member_ids,
            _ => &[],
        }
    }
}

impl Scoped for TaskRow {
    fn scalar(&self, field: Field) -> Option<&str> {
        match field {
            Field::AssigneeId => self.assignee_id.as_deref(),
            _ => None,
        }
    }
}

impl Scoped for LeaveRecord {
    fn scalar(&self, field: Field) -> Option<&str> {
        match field {
            Field::UserId => Some(&self.user_id),
            _ => None,
        }
    }
}

impl Scoped for TimesheetRow {
    fn scalar(&self, field: Field) -> Option<&str> {
        match field {
            Field::UserId => Some(&self.user_id),
            _ => None,
        }
    }
}
