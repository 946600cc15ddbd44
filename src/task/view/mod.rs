//! Presentation contracts for the task board.
//!
//! Nothing here renders. The board and list views, the due-date badges and
//! the header statistics all consume plain projections of the collection
//! mirror, and the transient interaction state (selection, drag source,
//! create-form draft) lives in [`BoardInteraction`].

mod board;
mod due;
mod interaction;
mod stats;

pub use board::{BoardColumn, Projection, ViewMode, board_columns, project};
pub use due::{DueDateClass, classify_due_date};
pub use interaction::{BoardInteraction, StatusChange};
pub use stats::BoardStats;
