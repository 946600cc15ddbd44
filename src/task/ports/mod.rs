//! Port contracts for task lookups.
//!
//! Tasks are stored through the generic [`RecordStore`] port; this module
//! adds the read-only grouping queries the board needs on top of it.
//!
//! [`RecordStore`]: crate::store::ports::RecordStore

pub mod queries;

pub use queries::TaskQueries;
