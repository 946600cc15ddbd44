//! Task board synchronisation for FlowTask.
//!
//! Tasks move between four status columns. The module keeps a UI-held
//! collection of tasks (the mirror) consistent with a record store under
//! create, update, delete and drag-to-reassign operations, and projects the
//! mirror into the board and list views. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Task-specific store queries in [`ports`]
//! - The collection controller in [`services`]
//! - View projections and transient board state in [`view`]

pub mod domain;
pub mod ports;
pub mod services;
pub mod view;
