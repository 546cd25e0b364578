use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid item id: {0}")]
    InvalidItemId(String),
    #[error("unknown status: {0}")]
    UnknownStatus(String),
    #[error("unknown priority tier: {0}")]
    UnknownTier(String),
    #[error("priority level out of range: {0} (expected 1-5)")]
    InvalidPriorityLevel(u8),
    #[error("config error: {0}")]
    Config(String),
}
