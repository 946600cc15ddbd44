//! Header and sidebar figures derived from the task mirror.

use crate::task::domain::{Task, TaskPriority, TaskStatus};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Aggregate counts shown in the board header and sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardStats {
    /// Number of tasks.
    pub total: usize,
    /// Tasks in `done`.
    pub completed: usize,
    /// Tasks in `in-progress`.
    pub in_progress: usize,
    /// Tasks in `todo`.
    pub todo: usize,
    /// Tasks due on the reference day, whatever their status.
    pub due_today: usize,
    /// Count per status; every status is present.
    pub by_status: BTreeMap<TaskStatus, usize>,
    /// Count per priority; every priority is present.
    pub by_priority: BTreeMap<TaskPriority, usize>,
}

impl BoardStats {
    /// Computes the figures for `tasks`, treating `today` as the current day.
    #[must_use]
    pub fn from_tasks(tasks: &[Task], today: NaiveDate) -> Self {
        let mut by_status: BTreeMap<TaskStatus, usize> =
            TaskStatus::ALL.into_iter().map(|status| (status, 0)).collect();
        let mut by_priority: BTreeMap<TaskPriority, usize> = TaskPriority::ALL
            .into_iter()
            .map(|priority| (priority, 0))
            .collect();
        let mut due_today = 0;

        for task in tasks {
            *by_status.entry(task.status()).or_default() += 1;
            *by_priority.entry(task.priority()).or_default() += 1;
            if task.due_date() == Some(today) {
                due_today += 1;
            }
        }

        let count = |status: TaskStatus| by_status.get(&status).copied().unwrap_or_default();
        let completed = count(TaskStatus::Done);
        let in_progress = count(TaskStatus::InProgress);
        let todo = count(TaskStatus::Todo);
        Self {
            total: tasks.len(),
            completed,
            in_progress,
            todo,
            due_today,
            by_status,
            by_priority,
        }
    }

    /// Returns the share of done tasks as a whole percentage.
    ///
    /// Rounds half up; an empty board reports 0.
    #[must_use]
    pub fn completion_rate(&self) -> usize {
        let doubled_total = self.total.saturating_mul(2);
        self.completed
            .saturating_mul(200)
            .saturating_add(self.total)
            .checked_div(doubled_total)
            .unwrap_or_default()
    }
}
