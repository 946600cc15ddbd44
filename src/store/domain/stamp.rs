//! Modification timestamps.

use chrono::{DateTime, TimeDelta, Utc};

/// Returns the `updated_at` stamp for a mutation observed at `now`.
///
/// The result is strictly later than `previous`, so every update is
/// observable even when the clock has not advanced since the last one.
#[must_use]
pub fn next_stamp(now: DateTime<Utc>, previous: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        return now;
    }
    previous
        .checked_add_signed(TimeDelta::microseconds(1))
        .unwrap_or(now)
}
