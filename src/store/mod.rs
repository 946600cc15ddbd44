//! Generic record storage for FlowTask collections.
//!
//! Tasks, projects and users share one storage contract: an ordered
//! collection of records addressed by an opaque identifier, mutated by
//! shallow merge, and reached through an asynchronous round trip. The module
//! follows hexagonal architecture:
//!
//! - Record contract, identifiers and timestamps in [`domain`]
//! - The store port in [`ports`]
//! - The latency-simulating in-memory adapter in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
