//! User records.

mod domain;

pub use domain::{User, UserDraft, UserPatch};
