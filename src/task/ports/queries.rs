//! Status and priority filters over a task store.

use crate::store::ports::{RecordStore, StoreResult};
use crate::task::domain::{Task, TaskPriority, TaskStatus};
use async_trait::async_trait;

/// Read-only grouping queries over stored tasks.
///
/// Implemented for every [`RecordStore<Task>`]. Each query is a pure filter
/// over the current collection, costs one round trip, and returns copies in
/// insertion order.
#[async_trait]
pub trait TaskQueries: Send + Sync {
    /// Returns the tasks with the given status.
    async fn find_by_status(&self, status: TaskStatus) -> StoreResult<Vec<Task>>;

    /// Returns the tasks with the given priority.
    async fn find_by_priority(&self, priority: TaskPriority) -> StoreResult<Vec<Task>>;
}

#[async_trait]
impl<S> TaskQueries for S
where
    S: RecordStore<Task>,
{
    async fn find_by_status(&self, status: TaskStatus) -> StoreResult<Vec<Task>> {
        self.filter(&move |task: &Task| task.status() == status)
            .await
    }

    async fn find_by_priority(&self, priority: TaskPriority) -> StoreResult<Vec<Task>> {
        self.filter(&move |task: &Task| task.priority() == priority)
            .await
    }
}
