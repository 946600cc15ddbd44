//! Transient board interaction state.

use crate::store::{domain::RecordId, ports::RecordStore};
use crate::task::{
    domain::{Task, TaskDraft, TaskStatus},
    services::{TaskCollection, TaskCollectionResult},
};

/// A status reassignment requested by dropping a card on a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// Task being moved.
    pub id: RecordId,
    /// Column the task was dropped on.
    pub status: TaskStatus,
}

/// UI-local state of the board: selected task, drag source and the create
/// form draft.
///
/// None of it is persisted, and none of it gates in-flight operations: a
/// request issued from a closed detail view still completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardInteraction {
    selected: Option<Task>,
    dragged: Option<Task>,
    draft: TaskDraft,
}

impl BoardInteraction {
    /// Creates idle interaction state with a blank draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the detail view for a task.
    pub fn select(&mut self, task: Task) {
        self.selected = Some(task);
    }

    /// Closes the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Returns the task shown in the detail view.
    #[must_use]
    pub const fn selected(&self) -> Option<&Task> {
        self.selected.as_ref()
    }

    /// Starts dragging a card.
    pub fn begin_drag(&mut self, task: Task) {
        self.dragged = Some(task);
    }

    /// Returns the card being dragged.
    #[must_use]
    pub const fn dragged(&self) -> Option<&Task> {
        self.dragged.as_ref()
    }

    /// Ends a drag over the column for `status`.
    ///
    /// The drag source is always cleared. A change is returned only when a
    /// card was being dragged and its status differs from the target.
    pub fn drop_on(&mut self, status: TaskStatus) -> Option<StatusChange> {
        let dragged = self.dragged.take()?;
        (dragged.status() != status).then(|| StatusChange {
            id: dragged.id().clone(),
            status,
        })
    }

    /// Ends a drag over `status` and applies any resulting change.
    ///
    /// Returns `Ok(None)` when the drop changes nothing.
    ///
    /// # Errors
    ///
    /// Propagates the collection error when the reassignment fails.
    pub async fn drop_onto<S>(
        &mut self,
        collection: &TaskCollection<S>,
        status: TaskStatus,
    ) -> TaskCollectionResult<Option<Task>>
    where
        S: RecordStore<Task>,
    {
        let Some(change) = self.drop_on(status) else {
            return Ok(None);
        };
        collection
            .reassign_status(&change.id, change.status)
            .await
            .map(Some)
    }

    /// Returns the create-form draft.
    #[must_use]
    pub const fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    /// Edits the create-form draft through its builder.
    pub fn edit_draft(&mut self, edit: impl FnOnce(TaskDraft) -> TaskDraft) {
        self.draft = edit(std::mem::take(&mut self.draft));
    }

    /// Restores the blank create form.
    pub fn reset_draft(&mut self) {
        self.draft = TaskDraft::default();
    }

    /// Takes the draft for submission, leaving a blank form behind.
    pub fn take_draft(&mut self) -> TaskDraft {
        std::mem::take(&mut self.draft)
    }
}
