//! Project records.
//!
//! Projects share the generic record store contract with tasks; the module
//! only defines the record, its draft and its patch.

mod domain;

pub use domain::{Project, ProjectDraft, ProjectPatch};
