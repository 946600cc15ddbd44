//! Record identifiers and their allocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier assigned to a record by its store.
///
/// Identifiers issued by [`IdSequence`] are decimal millisecond timestamps,
/// but callers must treat the value as an opaque string: seeded records may
/// carry any identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an identifier from an existing value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the wrapped string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocates timestamp-derived identifiers that never repeat within a store.
///
/// The candidate for each allocation is the creation time in Unix
/// milliseconds. A candidate at or below the last issued value, or one that
/// is already taken by a stored record, is bumped by one until it is free.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: Option<i64>,
}

impl IdSequence {
    /// Creates a sequence that has issued nothing yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Issues the next identifier for a record created at `now`.
    ///
    /// `is_taken` reports whether an identifier is already used by the
    /// collection the sequence serves.
    pub fn next(&mut self, now: DateTime<Utc>, is_taken: impl Fn(&RecordId) -> bool) -> RecordId {
        let mut candidate = now.timestamp_millis();
        if let Some(last) = self.last
            && candidate <= last
        {
            candidate = last.saturating_add(1);
        }

        loop {
            let id = RecordId::new(candidate.to_string());
            if !is_taken(&id) {
                self.last = Some(candidate);
                return id;
            }
            candidate = candidate.saturating_add(1);
        }
    }
}
