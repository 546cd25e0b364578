use docket_core::ItemId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("item {0} is in the parking lot")]
    Parked(ItemId),
    #[error("item {0} cannot have an empty title")]
    EmptyTitle(ItemId),
    #[error("core error: {0}")]
    Core(#[from] docket_core::CoreError),
}
