use docket_core::AgendaItem;

/// Format a key-value pair for display.
pub fn kv(key: &str, value: &str) -> String {
    format!("{key:>16}: {value}")
}

/// Format a header line.
pub fn header(title: &str) -> String {
    format!("=== {title} ===")
}

/// One-line summary of an item: position, id, priority and title.
pub fn item_line(position: usize, item: &AgendaItem) -> String {
    format!(
        "{position:>3}. [{}] {:<8} {} ({})",
        item.id, item.priority.label, item.title, item.status
    )
}

/// Multi-line listing of an item's non-empty text fields.
pub fn item_details(item: &AgendaItem) -> Vec<String> {
    [
        ("Description", &item.description),
        ("Rationale", &item.rationale),
        ("Target Outcome", &item.target_outcome),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(key, value)| kv(key, value))
    .collect()
}
