use serde::{Deserialize, Serialize};

pub const DEFAULT_UNTITLED_PLACEHOLDER: &str = "Untitled Item";

/// Parsing policies on which briefing sources disagree.
///
/// Both booleans are explicit policy choices rather than fixed behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Drop empty lines before classification. When false, blank lines are
    /// kept as separate lines but contribute no description text, so
    /// descriptions are still joined with single spaces.
    pub skip_blank_lines: bool,
    /// Keep appending unlabeled lines to the description after a
    /// `Rationale:` or `Outcome:` label has been seen. When false those
    /// lines are discarded.
    pub accumulate_after_labels: bool,
    /// Title used when a marker line is empty once annotations are removed.
    pub untitled_placeholder: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
            accumulate_after_labels: true,
            untitled_placeholder: DEFAULT_UNTITLED_PLACEHOLDER.to_string(),
        }
    }
}
