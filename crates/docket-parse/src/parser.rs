use docket_core::{AgendaItem, PriorityTable};

use crate::builder::ItemBuilder;
use crate::fallback::synthesize;
use crate::segment::segment;
use crate::ParseOptions;

/// Briefing parser configured with a keyword table and parsing policies.
///
/// Parsing holds no state between calls; the same input always yields the
/// same items, with ids restarting at `item-1`.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    table: PriorityTable,
    options: ParseOptions,
}

impl Parser {
    pub fn new(table: PriorityTable, options: ParseOptions) -> Self {
        Self { table, options }
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self::new(PriorityTable::standard(), options)
    }

    pub fn parse(&self, text: &str) -> Vec<AgendaItem> {
        let lines = segment(text, self.options.skip_blank_lines);
        let line_count = lines.len();

        let mut builder = ItemBuilder::new(&self.table, &self.options);
        for line in lines {
            builder.feed(line);
        }
        let mut items = builder.finish();

        let fallback = items.is_empty();
        if fallback {
            items.extend(synthesize(text, &self.table));
        }

        tracing::debug!(
            lines = line_count,
            items = items.len(),
            fallback,
            "parsed briefing"
        );
        items
    }
}

/// Parse with the standard keyword table and default options.
pub fn parse_briefing(text: &str) -> Vec<AgendaItem> {
    Parser::default().parse(text)
}
