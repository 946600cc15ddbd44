//! Application services for task collection synchronisation.

mod collection;
mod notice;

pub use collection::{TaskCollection, TaskCollectionError, TaskCollectionResult};
pub use notice::{Notice, NoticeLevel};
