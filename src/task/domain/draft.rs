//! Creation drafts and merge patches for tasks.

use super::{TaskDomainError, TaskPriority, TaskStatus};
use chrono::NaiveDate;

/// Caller-supplied fields for a new task.
///
/// The default draft is the blank create form: empty title, medium
/// priority, `todo` status, no due date and no labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
    due_date: Option<NaiveDate>,
    labels: Vec<String>,
}

impl TaskDraft {
    /// Creates a draft with the given title and default fields.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the labels, keeping their order.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = String>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Returns the title as entered.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Checks the draft can be submitted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        if self.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(())
    }

    pub(crate) fn into_parts(self) -> DraftParts {
        DraftParts {
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: self.status,
            due_date: self.due_date,
            labels: self.labels,
        }
    }
}

/// Owned draft fields handed to the task constructor.
pub(crate) struct DraftParts {
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) priority: TaskPriority,
    pub(crate) status: TaskStatus,
    pub(crate) due_date: Option<NaiveDate>,
    pub(crate) labels: Vec<String>,
}

/// Fields merged over a stored task.
///
/// Absent fields leave the stored value untouched. Description and due date
/// are doubly optional so a patch can clear them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<Option<String>>,
    pub(crate) priority: Option<TaskPriority>,
    pub(crate) status: Option<TaskStatus>,
    pub(crate) due_date: Option<Option<NaiveDate>>,
    pub(crate) labels: Option<Vec<String>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Overwrites the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Overwrites the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Overwrites the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Overwrites the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Overwrites the labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = String>) -> Self {
        self.labels = Some(labels.into_iter().collect());
        self
    }

    /// Returns the status this patch sets, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns `true` when the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.due_date.is_none()
            && self.labels.is_none()
    }
}
