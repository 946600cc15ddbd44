//! Due-date badges.

use crate::task::domain::{Task, TaskStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display classification of a due date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueDateClass {
    /// Past due and not done.
    Overdue,
    /// Due today.
    Today,
    /// Due tomorrow.
    Tomorrow,
    /// Any other date, including past due dates of finished tasks.
    Other,
}

impl DueDateClass {
    /// Classifies a due date for a task in `status`, seen on `today`.
    ///
    /// Overdue wins over every other class; a done task is never overdue.
    #[must_use]
    pub fn classify(due: NaiveDate, status: TaskStatus, today: NaiveDate) -> Self {
        if due < today && status != TaskStatus::Done {
            return Self::Overdue;
        }
        if due == today {
            return Self::Today;
        }
        if today.succ_opt() == Some(due) {
            return Self::Tomorrow;
        }
        Self::Other
    }
}

/// Classifies a task's due date, or returns `None` when it has none.
#[must_use]
pub fn classify_due_date(task: &Task, today: NaiveDate) -> Option<DueDateClass> {
    task.due_date()
        .map(|due| DueDateClass::classify(due, task.status(), today))
}
