//! Port contracts for record storage.
//!
//! Ports define infrastructure-agnostic interfaces used by collection
//! services.

pub mod repository;

pub use repository::{RecordStore, StoreError, StoreResult};
