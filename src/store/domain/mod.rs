//! Domain contract shared by every stored record type.

mod ids;
mod record;
mod stamp;

pub use ids::{IdSequence, RecordId};
pub use record::Record;
pub use stamp::next_stamp;
