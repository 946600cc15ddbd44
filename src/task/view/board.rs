//! Board and list projections of the task mirror.

use crate::task::domain::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Layout the task collection is shown in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Four status columns.
    #[default]
    Board,
    /// One flat list.
    List,
}

/// One status column of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    /// Status every task in the column has.
    pub status: TaskStatus,
    /// Column heading.
    pub title: &'static str,
    /// Column members in mirror order.
    pub tasks: Vec<Task>,
}

/// Result of projecting the mirror for a view mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Columns in fixed order: todo, in-progress, review, done.
    Board([BoardColumn; 4]),
    /// Every task in mirror order.
    List(Vec<Task>),
}

/// Partitions tasks into the four status columns by exact status match.
#[must_use]
pub fn board_columns(tasks: &[Task]) -> [BoardColumn; 4] {
    TaskStatus::ALL.map(|status| BoardColumn {
        status,
        title: status.title(),
        tasks: tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect(),
    })
}

/// Projects the mirror for the given view mode.
///
/// The list view keeps insertion order; nothing is sorted.
#[must_use]
pub fn project(tasks: &[Task], mode: ViewMode) -> Projection {
    match mode {
        ViewMode::Board => Projection::Board(board_columns(tasks)),
        ViewMode::List => Projection::List(tasks.to_vec()),
    }
}
