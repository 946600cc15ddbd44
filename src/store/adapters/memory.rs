//! In-memory record store with simulated round-trip latency.

use async_trait::async_trait;
use mockable::Clock;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use thiserror::Error;

use crate::config::LatencyProfile;
use crate::store::{
    domain::{IdSequence, Record, RecordId, next_stamp},
    ports::{RecordStore, StoreError, StoreResult},
};

/// Errors raised while seeding a store from static data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed document is not a JSON array of records.
    #[error("malformed {kind} seed data: {source}")]
    Malformed {
        /// Kind of record being seeded.
        kind: &'static str,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Two seeded records share an identifier.
    #[error("duplicate {kind} identifier in seed data: {id}")]
    DuplicateId {
        /// Kind of record being seeded.
        kind: &'static str,
        /// Identifier that appears more than once.
        id: RecordId,
    },

    /// A seeded record was last modified before it was created.
    #[error("{kind} {id} in seed data has updatedAt before createdAt")]
    InvertedTimestamps {
        /// Kind of record being seeded.
        kind: &'static str,
        /// Identifier of the offending record.
        id: RecordId,
    },
}

/// Thread-safe in-memory store holding one collection of records.
///
/// Every operation waits for the delay configured in its
/// [`LatencyProfile`] before touching state, and the internal lock is never
/// held across that wait.
#[derive(Debug, Clone)]
pub struct InMemoryStore<R, C: Clock + Send + Sync> {
    state: Arc<RwLock<StoreState<R>>>,
    clock: C,
    latency: LatencyProfile,
}

#[derive(Debug)]
struct StoreState<R> {
    records: Vec<R>,
    ids: IdSequence,
}

impl<R: Record, C: Clock + Send + Sync> InMemoryStore<R, C> {
    /// Creates an empty store.
    #[must_use]
    pub fn new(clock: C, latency: LatencyProfile) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState {
                records: Vec::new(),
                ids: IdSequence::new(),
            })),
            clock,
            latency,
        }
    }

    /// Creates a store holding `records` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateId`] when two records share an
    /// identifier and [`SeedError::InvertedTimestamps`] when a record's
    /// `updated_at` precedes its `created_at`.
    pub fn seeded(records: Vec<R>, clock: C, latency: LatencyProfile) -> Result<Self, SeedError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id().clone()) {
                return Err(SeedError::DuplicateId {
                    kind: R::KIND,
                    id: record.id().clone(),
                });
            }
            if record.updated_at() < record.created_at() {
                return Err(SeedError::InvertedTimestamps {
                    kind: R::KIND,
                    id: record.id().clone(),
                });
            }
        }

        tracing::debug!(kind = R::KIND, count = records.len(), "seeded store");
        Ok(Self {
            state: Arc::new(RwLock::new(StoreState {
                records,
                ids: IdSequence::new(),
            })),
            clock,
            latency,
        })
    }

    /// Creates a store from a JSON array of records.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Malformed`] when the document does not parse, and
    /// the errors of [`Self::seeded`] for invalid records.
    pub fn from_json(json: &str, clock: C, latency: LatencyProfile) -> Result<Self, SeedError>
    where
        R: DeserializeOwned,
    {
        let records: Vec<R> = serde_json::from_str(json).map_err(|source| SeedError::Malformed {
            kind: R::KIND,
            source,
        })?;
        Self::seeded(records, clock, latency)
    }

    /// Returns the latency profile applied to operations.
    #[must_use]
    pub const fn latency(&self) -> &LatencyProfile {
        &self.latency
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, StoreState<R>>> {
        self.state.read().map_err(|err| {
            tracing::error!(kind = R::KIND, "store lock poisoned");
            StoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState<R>>> {
        self.state.write().map_err(|err| {
            tracing::error!(kind = R::KIND, "store lock poisoned");
            StoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Waits out one simulated round trip.
///
/// A zero delay still yields once, so no operation resolves synchronously.
async fn round_trip(delay: Duration) {
    if delay.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(delay).await;
    }
}

fn position<R: Record>(records: &[R], id: &RecordId) -> StoreResult<usize> {
    records
        .iter()
        .position(|record| record.id() == id)
        .ok_or_else(|| {
            tracing::debug!(kind = R::KIND, %id, "record not found");
            StoreError::not_found::<R>(id)
        })
}

#[async_trait]
impl<R: Record, C: Clock + Send + Sync> RecordStore<R> for InMemoryStore<R, C> {
    async fn get_all(&self) -> StoreResult<Vec<R>> {
        round_trip(self.latency.get_all).await;
        let state = self.read()?;
        Ok(state.records.clone())
    }

    async fn get_by_id(&self, id: &RecordId) -> StoreResult<Option<R>> {
        round_trip(self.latency.get_by_id).await;
        let state = self.read()?;
        Ok(state
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }

    async fn create(&self, draft: R::Draft) -> StoreResult<R> {
        round_trip(self.latency.create).await;
        let mut state = self.write()?;
        let stamp = self.clock.utc();
        let StoreState { records, ids } = &mut *state;
        let id = ids.next(stamp, |candidate| {
            records.iter().any(|record| record.id() == candidate)
        });
        let record = R::from_draft(id, draft, stamp);
        records.push(record.clone());
        tracing::debug!(kind = R::KIND, id = %record.id(), "record created");
        Ok(record)
    }

    async fn update(&self, id: &RecordId, patch: R::Patch) -> StoreResult<R> {
        round_trip(self.latency.update).await;
        let mut state = self.write()?;
        let index = position(&state.records, id)?;
        let now = self.clock.utc();
        let record = state
            .records
            .get_mut(index)
            .ok_or_else(|| StoreError::not_found::<R>(id))?;
        let stamp = next_stamp(now, record.updated_at());
        record.apply_patch(patch);
        record.touch(stamp);
        tracing::debug!(kind = R::KIND, %id, "record updated");
        Ok(record.clone())
    }

    async fn delete(&self, id: &RecordId) -> StoreResult<()> {
        round_trip(self.latency.delete).await;
        let mut state = self.write()?;
        let index = position(&state.records, id)?;
        state.records.remove(index);
        tracing::debug!(kind = R::KIND, %id, "record deleted");
        Ok(())
    }

    async fn filter(
        &self,
        predicate: &(dyn for<'r> Fn(&'r R) -> bool + Send + Sync),
    ) -> StoreResult<Vec<R>> {
        round_trip(self.latency.filter).await;
        let state = self.read()?;
        Ok(state
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }
}
