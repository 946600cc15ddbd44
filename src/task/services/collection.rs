//! Task collection controller: keeps the UI mirror in step with the store.

use crate::store::{
    domain::RecordId,
    ports::{RecordStore, StoreError},
};
use crate::task::domain::{Task, TaskDomainError, TaskDraft, TaskPatch, TaskStatus};
use std::collections::VecDeque;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

use super::Notice;

const TITLE_REQUIRED: &str = "Task title is required";
const LOAD_FAILED: &str = "Failed to load tasks";
const CREATED: &str = "Task created successfully!";
const CREATE_FAILED: &str = "Failed to create task";
const UPDATED: &str = "Task updated successfully!";
const UPDATE_FAILED: &str = "Failed to update task";
const DELETED: &str = "Task deleted successfully!";
const DELETE_FAILED: &str = "Failed to delete task";

const MAX_NOTICES: usize = 32;

/// Errors returned by collection operations.
///
/// Both variants leave the mirror exactly as it was before the operation.
#[derive(Debug, Error)]
pub enum TaskCollectionError {
    /// Input failed a precondition; the store was never contacted.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The store rejected the operation.
    #[error("operation failed: {0}")]
    OperationFailed(#[from] StoreError),
}

impl TaskCollectionError {
    /// Returns `true` for input validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` when the store reported a missing task.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::OperationFailed(err) if err.is_not_found())
    }
}

/// Result type for collection operations.
pub type TaskCollectionResult<T> = Result<T, TaskCollectionError>;

#[derive(Debug, Default)]
struct CollectionState {
    tasks: Vec<Task>,
    notices: VecDeque<Notice>,
    last_error: Option<String>,
}

impl CollectionState {
    fn notify(&mut self, notice: Notice) {
        if self.notices.len() >= MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }
}

/// Mediates between board intents and the task store.
///
/// The controller holds the mirror: the session's rendered copy of the task
/// collection. Every mutation awaits the store first and applies the
/// returned record to the mirror only on success, so there are no
/// optimistic writes to roll back.
///
/// All operations take `&self`, and callers may issue several without
/// awaiting the previous one. Each in-flight operation runs to completion
/// and its result is applied when it resolves, so two concurrent updates to
/// the same task end with whichever resolved last. Every applied record is
/// a complete store result; the mirror never holds a merged record.
pub struct TaskCollection<S>
where
    S: RecordStore<Task>,
{
    store: Arc<S>,
    state: Arc<RwLock<CollectionState>>,
}

impl<S> Clone for TaskCollection<S>
where
    S: RecordStore<Task>,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> TaskCollection<S>
where
    S: RecordStore<Task>,
{
    /// Maximum number of undrained notices kept, newest last.
    pub const NOTICE_CAPACITY: usize = MAX_NOTICES;

    /// Creates a controller with an empty mirror.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            state: Arc::new(RwLock::new(CollectionState::default())),
        }
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Replaces the mirror with the store's current collection.
    ///
    /// Returns the number of loaded tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::OperationFailed`] when the store
    /// cannot be read; the mirror keeps its previous contents and
    /// [`Self::last_error`] reports the failure.
    pub async fn load(&self) -> TaskCollectionResult<usize> {
        match self.store.get_all().await {
            Ok(tasks) => {
                let count = tasks.len();
                self.with_state(|state| {
                    state.tasks = tasks;
                    state.last_error = None;
                });
                tracing::debug!(count, "task mirror loaded");
                Ok(count)
            }
            Err(err) => {
                let message = err.to_string();
                self.with_state(|state| state.last_error = Some(message));
                Err(self.reject(LOAD_FAILED, err.into()))
            }
        }
    }

    /// Creates a task and appends it to the mirror.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::Validation`] without contacting the
    /// store when the title is empty after trimming, and
    /// [`TaskCollectionError::OperationFailed`] when the store rejects the
    /// draft.
    pub async fn create(&self, draft: TaskDraft) -> TaskCollectionResult<Task> {
        if let Err(err) = draft.validate() {
            return Err(self.reject(TITLE_REQUIRED, err.into()));
        }

        let created = match self.store.create(draft).await {
            Ok(task) => task,
            Err(err) => return Err(self.reject(CREATE_FAILED, err.into())),
        };

        self.with_state(|state| {
            state.tasks.push(created.clone());
            state.notify(Notice::success(CREATED));
        });
        tracing::info!(id = %created.id(), status = %created.status(), "task created");
        Ok(created)
    }

    /// Merges `patch` into a stored task and refreshes its mirror entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::OperationFailed`] when the task does
    /// not exist or the store rejects the update.
    pub async fn update(&self, id: &RecordId, patch: TaskPatch) -> TaskCollectionResult<Task> {
        let updated = match self.store.update(id, patch).await {
            Ok(task) => task,
            Err(err) => return Err(self.reject(UPDATE_FAILED, err.into())),
        };

        self.with_state(|state| {
            if let Some(entry) = state.tasks.iter_mut().find(|task| task.id() == id) {
                *entry = updated.clone();
            }
            state.notify(Notice::success(UPDATED));
        });
        tracing::info!(%id, status = %updated.status(), "task updated");
        Ok(updated)
    }

    /// Deletes a task from the store and the mirror.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::OperationFailed`] when the task does
    /// not exist or the store rejects the deletion.
    pub async fn delete(&self, id: &RecordId) -> TaskCollectionResult<()> {
        if let Err(err) = self.store.delete(id).await {
            return Err(self.reject(DELETE_FAILED, err.into()));
        }

        self.with_state(|state| {
            state.tasks.retain(|task| task.id() != id);
            state.notify(Notice::success(DELETED));
        });
        tracing::info!(%id, "task deleted");
        Ok(())
    }

    /// Moves a task to another status column.
    ///
    /// When the mirror already shows the task in `status` this returns the
    /// mirror copy without a store round trip, so `updated_at` is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::OperationFailed`] when the update
    /// fails.
    pub async fn reassign_status(
        &self,
        id: &RecordId,
        status: TaskStatus,
    ) -> TaskCollectionResult<Task> {
        if let Some(current) = self.task(id)
            && current.status() == status
        {
            tracing::debug!(%id, %status, "status unchanged, skipping round trip");
            return Ok(current);
        }
        self.update(id, TaskPatch::new().with_status(status)).await
    }

    /// Marks a task as done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::OperationFailed`] when the update
    /// fails.
    pub async fn complete(&self, id: &RecordId) -> TaskCollectionResult<Task> {
        self.reassign_status(id, TaskStatus::Done).await
    }

    /// Flips a task between done and todo.
    ///
    /// A done task returns to `todo`; any other status becomes `done`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCollectionError::OperationFailed`] when the task is not
    /// in the mirror or the update fails.
    pub async fn toggle_complete(&self, id: &RecordId) -> TaskCollectionResult<Task> {
        let Some(current) = self.task(id) else {
            let err = StoreError::not_found::<Task>(id);
            return Err(self.reject(UPDATE_FAILED, err.into()));
        };
        let target = if current.status() == TaskStatus::Done {
            TaskStatus::Todo
        } else {
            TaskStatus::Done
        };
        self.reassign_status(id, target).await
    }

    /// Returns a copy of the mirror in insertion order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.read_state(|state| state.tasks.clone())
    }

    /// Returns the mirrored task with the given identifier.
    #[must_use]
    pub fn task(&self, id: &RecordId) -> Option<Task> {
        self.read_state(|state| state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    /// Returns the number of mirrored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_state(|state| state.tasks.len())
    }

    /// Returns `true` when the mirror holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the message of the last failed load, if the most recent load
    /// failed.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.read_state(|state| state.last_error.clone())
    }

    /// Takes every pending notice, oldest first.
    ///
    /// At most [`Self::NOTICE_CAPACITY`] notices are held; older ones are
    /// dropped when the queue is not drained.
    pub fn drain_notices(&self) -> Vec<Notice> {
        self.with_state(|state| state.notices.drain(..).collect())
    }

    fn reject(&self, message: &'static str, err: TaskCollectionError) -> TaskCollectionError {
        tracing::warn!(error = %err, "{message}");
        self.with_state(|state| state.notify(Notice::error(message)));
        err
    }

    fn read_state<T>(&self, read: impl FnOnce(&CollectionState) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        read(&state)
    }

    fn with_state<T>(&self, write: impl FnOnce(&mut CollectionState) -> T) -> T {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        write(&mut state)
    }
}
