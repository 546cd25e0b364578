pub mod board;
pub mod error;
pub mod patch;

pub use board::{Board, Location};
pub use error::BoardError;
pub use patch::ItemPatch;
