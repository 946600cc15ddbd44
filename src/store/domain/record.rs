//! The contract a type fulfils to live in a record store.

use super::RecordId;
use chrono::{DateTime, Utc};

/// A record held by a store.
///
/// Records are created from a [`Record::Draft`] that carries no identifier
/// or timestamps, and mutated only by merging a [`Record::Patch`] over the
/// stored value. Fields absent from a patch are preserved unchanged.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable record kind used in errors and logs.
    const KIND: &'static str;

    /// Caller-supplied fields for creating a record.
    type Draft: Send + 'static;

    /// Caller-supplied fields merged over a stored record.
    type Patch: Send + 'static;

    /// Returns the record identifier.
    fn id(&self) -> &RecordId;

    /// Returns the creation timestamp.
    fn created_at(&self) -> DateTime<Utc>;

    /// Returns the latest modification timestamp.
    fn updated_at(&self) -> DateTime<Utc>;

    /// Builds a stored record from a draft, stamping both timestamps.
    fn from_draft(id: RecordId, draft: Self::Draft, stamp: DateTime<Utc>) -> Self;

    /// Shallow-merges the fields present in `patch` over this record.
    ///
    /// Implementations must not touch the identifier or the timestamps.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Sets the modification timestamp.
    fn touch(&mut self, stamp: DateTime<Utc>);
}
