//! Domain model for board tasks.
//!
//! Tasks are created from a [`TaskDraft`], changed only by merging a
//! [`TaskPatch`] in the store, and carry exactly one [`TaskStatus`].

mod draft;
mod error;
mod status;
mod task;

pub use draft::{TaskDraft, TaskPatch};
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use status::{TaskPriority, TaskStatus};
pub use task::Task;
