//! Adapter implementations of the record store port.

pub mod memory;

pub use memory::{InMemoryStore, SeedError};
