//! Store port for record creation, lookup, merge-update and removal.

use crate::store::domain::{Record, RecordId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Asynchronous record store contract.
///
/// Every operation completes one round trip before resolving and hands back
/// owned copies: mutating a returned record never affects stored state.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Returns every stored record in insertion order.
    async fn get_all(&self) -> StoreResult<Vec<R>>;

    /// Finds a record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn get_by_id(&self, id: &RecordId) -> StoreResult<Option<R>>;

    /// Stores a new record built from `draft`.
    ///
    /// The store assigns a fresh identifier and stamps `created_at` and
    /// `updated_at` with the same instant.
    async fn create(&self, draft: R::Draft) -> StoreResult<R>;

    /// Merges `patch` over the stored record and restamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the record does not exist.
    async fn update(&self, id: &RecordId, patch: R::Patch) -> StoreResult<R>;

    /// Removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the record does not exist.
    async fn delete(&self, id: &RecordId) -> StoreResult<()>;

    /// Returns the records matching `predicate`, in insertion order.
    async fn filter(
        &self,
        predicate: &(dyn for<'r> Fn(&'r R) -> bool + Send + Sync),
    ) -> StoreResult<Vec<R>>;
}

/// Errors returned by store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record with the identifier exists.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up.
        kind: &'static str,
        /// Identifier that was not found.
        id: RecordId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Builds a not-found error for a record of type `R`.
    #[must_use]
    pub fn not_found<R: Record>(id: &RecordId) -> Self {
        Self::NotFound {
            kind: R::KIND,
            id: id.clone(),
        }
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` when the error reports a missing record.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
