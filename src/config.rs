//! Store configuration.
//!
//! Every store operation waits for a simulated network round trip before it
//! resolves. [`LatencyProfile`] holds those delays per operation and
//! [`StoreConfig`] bundles them for the composition root.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// Simulated round-trip delay for each store operation.
///
/// Delays serialise as whole milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LatencyProfile {
    /// Delay before `get_all` resolves.
    #[serde(with = "millis")]
    pub get_all: Duration,
    /// Delay before `get_by_id` resolves.
    #[serde(with = "millis")]
    pub get_by_id: Duration,
    /// Delay before `create` resolves.
    #[serde(with = "millis")]
    pub create: Duration,
    /// Delay before `update` resolves.
    #[serde(with = "millis")]
    pub update: Duration,
    /// Delay before `delete` resolves.
    #[serde(with = "millis")]
    pub delete: Duration,
    /// Delay before a filtered read resolves.
    #[serde(with = "millis")]
    pub filter: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            get_all: Duration::from_millis(300),
            get_by_id: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(300),
            delete: Duration::from_millis(250),
            filter: Duration::from_millis(200),
        }
    }
}

impl LatencyProfile {
    /// Creates a profile with no delay.
    ///
    /// Operations still yield to the scheduler once before resolving.
    #[must_use]
    pub const fn instant() -> Self {
        Self::uniform(Duration::ZERO)
    }

    /// Creates a profile applying the same delay to every operation.
    #[must_use]
    pub const fn uniform(delay: Duration) -> Self {
        Self {
            get_all: delay,
            get_by_id: delay,
            create: delay,
            update: delay,
            delete: delay,
            filter: delay,
        }
    }
}

/// Configuration shared by every store in a workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Simulated latency applied to store operations.
    pub latency: LatencyProfile,
}

impl StoreConfig {
    /// Creates a configuration with the given latency profile.
    #[must_use]
    pub const fn with_latency(latency: LatencyProfile) -> Self {
        Self { latency }
    }

    /// Creates a configuration without simulated delays.
    ///
    /// Useful for tests that do not observe timing.
    #[must_use]
    pub const fn instant() -> Self {
        Self::with_latency(LatencyProfile::instant())
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when the input is not a valid
    /// configuration document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

mod millis {
    use super::{Deserialize, Deserializer, Duration, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
