use docket_core::{AgendaItem, ItemId, PriorityTable};

use crate::classify::classify_priority;
use crate::fields::{append_description, match_label};
use crate::segment::Line;
use crate::split::{split_title, strip_annotations};
use crate::ParseOptions;

const LINE_SEPARATOR: &str = " ";

/// The item currently receiving continuation lines.
struct OpenItem {
    item: AgendaItem,
    /// A rationale or outcome label has been applied.
    labeled: bool,
}

/// Folds classified lines into agenda items.
///
/// A builder lives for exactly one parse call: ids start at `item-1` and
/// the open item is never visible outside it.
pub struct ItemBuilder<'a> {
    table: &'a PriorityTable,
    options: &'a ParseOptions,
    current: Option<OpenItem>,
    items: Vec<AgendaItem>,
    next_id: ItemId,
}

impl<'a> ItemBuilder<'a> {
    pub fn new(table: &'a PriorityTable, options: &'a ParseOptions) -> Self {
        Self {
            table,
            options,
            current: None,
            items: Vec::new(),
            next_id: ItemId::FIRST,
        }
    }

    pub fn feed(&mut self, line: Line<'_>) {
        match line {
            Line::Marker { text, .. } => self.open(text),
            Line::Continuation(text) => self.continue_item(text),
            // Kept blank lines carry no text, so they add nothing.
            Line::Blank => {}
        }
    }

    /// Flush the open item and return everything built so far.
    pub fn finish(mut self) -> Vec<AgendaItem> {
        self.close();
        self.items
    }

    fn close(&mut self) {
        if let Some(open) = self.current.take() {
            self.items.push(open.item);
        }
    }

    fn open(&mut self, raw: &str) {
        self.close();

        let (raw_title, inline_description) = split_title(raw);
        let priority = classify_priority(raw, self.table);
        let mut title = strip_annotations(raw_title);
        if title.is_empty() {
            title = self.options.untitled_placeholder.clone();
        }

        let id = self.next_id;
        self.next_id = id.next();

        let mut item = AgendaItem::new(id, title, priority, self.items.len());
        item.description = inline_description.to_string();
        tracing::trace!(%id, title = %item.title, priority = %item.priority.label, "opened item");

        self.current = Some(OpenItem { item, labeled: false });
    }

    fn continue_item(&mut self, line: &str) {
        let Some(open) = self.current.as_mut() else {
            tracing::trace!(line, "dropping continuation before first marker");
            return;
        };

        if let Some((rule, value)) = match_label(line) {
            (rule.apply)(&mut open.item, value);
            if rule.closes_description {
                open.labeled = true;
            }
            return;
        }

        if open.labeled && !self.options.accumulate_after_labels {
            return;
        }

        append_description(&mut open.item, line, LINE_SEPARATOR);
    }
}
