use docket_core::{AgendaItem, ItemId, PriorityTable};

/// Build the single item used when no marker line was found.
///
/// Returns `None` for empty or all-whitespace input. Otherwise the first
/// non-empty line becomes the title and the remaining lines, joined by
/// single spaces, the description.
pub fn synthesize(text: &str, table: &PriorityTable) -> Option<AgendaItem> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let title = lines.next()?.to_string();
    let description = lines.collect::<Vec<_>>().join(" ");

    let mut item = AgendaItem::new(ItemId::FIRST, title, table.default_priority().clone(), 0);
    item.description = description;
    Some(item)
}
