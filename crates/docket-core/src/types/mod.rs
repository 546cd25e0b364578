pub mod item;
pub mod priority;
pub mod status;

pub use item::AgendaItem;
pub use priority::Priority;
pub use status::ItemStatus;
