//! FlowTask: task board synchronisation core.
//!
//! This crate keeps a UI-held collection of board tasks consistent with a
//! backing record store under create, update, delete and drag-to-reassign
//! operations. The store is an in-memory simulator that delays every call by
//! a configurable round trip, so callers observe the same asynchronous
//! ordering a networked backend would produce.
//!
//! # Architecture
//!
//! FlowTask follows hexagonal architecture principles:
//!
//! - **Domain**: Records, drafts and patches with no infrastructure
//!   dependencies
//! - **Ports**: Abstract async trait interfaces for storage
//! - **Adapters**: The latency-simulating in-memory store
//!
//! # Modules
//!
//! - [`store`]: Generic record storage shared by every collection
//! - [`task`]: Task records, the collection controller and board projections
//! - [`project`] and [`user`]: The other seeded collections
//! - [`workspace`]: Composition root owning the session's stores
//! - [`config`]: Store latency configuration

pub mod config;
pub mod project;
pub mod store;
pub mod task;
pub mod user;
pub mod workspace;
