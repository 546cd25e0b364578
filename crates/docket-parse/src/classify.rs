use docket_core::{Priority, PriorityTable};

/// Map a text fragment to exactly one priority.
///
/// The fragment is uppercased and checked against each table entry in
/// order; an entry matches when its keyword occurs bracketed (`[URGENT]`)
/// or bare anywhere in the fragment. The first matching entry wins, so
/// "critical but low effort" classifies as Critical. Bare matching is a
/// plain substring test: "FOLLOW UP" contains LOW.
pub fn classify_priority(fragment: &str, table: &PriorityTable) -> Priority {
    let upper = fragment.to_uppercase();
    for (keyword, priority) in table.entries() {
        if upper.contains(&format!("[{keyword}]")) || upper.contains(keyword.as_str()) {
            return priority.clone();
        }
    }
    table.default_priority().clone()
}
