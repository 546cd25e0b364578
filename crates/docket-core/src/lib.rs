pub mod error;
pub mod id;
pub mod priority_table;
pub mod types;

pub use error::CoreError;
pub use id::{ItemId, MeetingId};
pub use priority_table::{KeywordEntry, PriorityConfig, PriorityTable};
pub use types::{AgendaItem, ItemStatus, Priority};
