//! Heuristic text-to-agenda parser.
//!
//! Raw briefing text is split into lines, each line is classified as an
//! item-start marker or a continuation, and a small state machine folds the
//! lines into [`AgendaItem`]s. The parser is total: every input produces a
//! (possibly empty) list and nothing here returns an error.

pub mod builder;
pub mod classify;
pub mod fallback;
pub mod fields;
pub mod options;
pub mod parser;
pub mod segment;
pub mod split;

pub use builder::ItemBuilder;
pub use classify::classify_priority;
pub use docket_core::AgendaItem;
pub use options::ParseOptions;
pub use parser::{parse_briefing, Parser};
pub use segment::{Line, MarkerKind};
