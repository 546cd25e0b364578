use docket_board::{Board, ItemPatch, Location};
use docket_core::{ItemId, ItemStatus, MeetingId, Priority, PriorityConfig};
use docket_export::{export_markdown, render_markdown, write_markdown};
use docket_parse::{parse_briefing, ParseOptions, Parser};

const BRIEFING: &str = "\
# Q4 Planning Briefing

Prepared by the ops team.

1. [URGENT] Budget Review
Rationale: Q4 spending needs approval
Target Outcome: Approved budget

2. Vendor contracts - renewals due this month
Legal has flagged two clauses.
Outcome: decision on renewal

- [RECURRING] Metrics review
- [low] Office plants
";

fn titles(items: &[docket_core::AgendaItem]) -> Vec<&str> {
    items.iter().map(|i| i.title.as_str()).collect()
}

// === Parsing a realistic briefing ===
#[test]
fn test_full_briefing_parse() {
    let items = parse_briefing(BRIEFING);
    assert_eq!(
        titles(&items),
        [
            "Q4 Planning Briefing",
            "Budget Review",
            "Vendor contracts",
            "Metrics review",
            "Office plants"
        ]
    );

    // Prose under a header attaches to the header item.
    assert_eq!(items[0].description, "Prepared by the ops team.");

    let budget = &items[1];
    assert_eq!(budget.priority, Priority::high());
    assert_eq!(budget.rationale, "Q4 spending needs approval");
    assert_eq!(budget.target_outcome, "Approved budget");

    let vendor = &items[2];
    assert_eq!(
        vendor.description,
        "renewals due this month Legal has flagged two clauses."
    );
    assert_eq!(vendor.target_outcome, "decision on renewal");

    assert_eq!(items[3].priority, Priority::ongoing());
    assert_eq!(items[4].priority, Priority::low());

    for (index, item) in items.iter().enumerate() {
        assert_eq!(item.order, index);
        assert_eq!(item.status, ItemStatus::Open);
        assert_eq!(item.id, ItemId::new(index as u32 + 1));
    }
}

// === JSON output contract ===
#[test]
fn test_json_contract_field_names() {
    let items = parse_briefing("1. [URGENT] Budget Review\nTarget Outcome: Approved budget");
    let value = serde_json::to_value(&items).unwrap();
    let item = &value[0];
    assert_eq!(item["id"], "item-1");
    assert_eq!(item["title"], "Budget Review");
    assert_eq!(item["targetOutcome"], "Approved budget");
    assert_eq!(item["priority"]["level"], 2);
    assert_eq!(item["priority"]["color"], "#ea580c");
    assert_eq!(item["priority"]["label"], "High");
    assert_eq!(item["status"], "open");
    assert_eq!(item["order"], 0);
}

// === Fallback guarantee ===
#[test]
fn test_fallback_and_empty_input() {
    assert!(parse_briefing("").is_empty());
    assert!(parse_briefing("\n   \n\t").is_empty());

    let items = parse_briefing("Just some notes about the offsite.\nBring snacks.");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Just some notes about the offsite.");
    assert_eq!(items[0].description, "Bring snacks.");
    assert_eq!(items[0].priority, Priority::medium());
}

// === Parser policies ===
#[test]
fn test_policy_flags_change_description() {
    let text = "- Item\nfirst\nRationale: because\n\nlater";

    let default = parse_briefing(text);
    assert_eq!(default[0].description, "first later");

    let strict = Parser::with_options(ParseOptions {
        accumulate_after_labels: false,
        ..ParseOptions::default()
    })
    .parse(text);
    assert_eq!(strict[0].description, "first");

    let kept_blanks = Parser::with_options(ParseOptions {
        skip_blank_lines: false,
        ..ParseOptions::default()
    })
    .parse(text);
    assert_eq!(kept_blanks[0].description, "first later");
}

// === Configurable keyword table ===
#[test]
fn test_custom_priority_table() {
    let config: PriorityConfig = toml::from_str(
        "default = \"low\"\n\n[[keyword]]\nword = \"blocker\"\ntier = \"critical\"\n",
    )
    .unwrap();
    let table = config.to_table().unwrap();
    let parser = Parser::new(table, ParseOptions::default());
    let items = parser.parse("- BLOCKER: CI is red\n- [URGENT] not a keyword here");
    assert_eq!(items[0].title, "BLOCKER");
    assert_eq!(items[0].description, "CI is red");
    assert_eq!(items[0].priority, Priority::critical());
    assert_eq!(items[1].priority, Priority::low());
}

// === Board editing ===
#[test]
fn test_reorder_keeps_ids() {
    let mut board = Board::load(BRIEFING, &Parser::default());
    let before: Vec<ItemId> = board.items().iter().map(|i| i.id).collect();

    board.reorder(4, 0).unwrap();
    board.move_down(ItemId::new(1)).unwrap();

    let mut after: Vec<ItemId> = board.items().iter().map(|i| i.id).collect();
    assert_eq!(after[0], ItemId::new(5));
    for (index, item) in board.items().iter().enumerate() {
        assert_eq!(item.order, index);
    }
    after.sort();
    assert_eq!(after, before);
}

#[test]
fn test_parking_lot_round_trip() {
    let mut board = Board::load(BRIEFING, &Parser::default());
    let loc = board.set_status(ItemId::new(3), ItemStatus::Deferred).unwrap();
    assert_eq!(loc, Location::ParkingLot(0));
    assert_eq!(board.len(), 4);
    assert!(board.items().iter().all(|i| i.id != ItemId::new(3)));
    assert_eq!(board.parking_lot()[0].order, 2);

    board
        .update(
            ItemId::new(3),
            &ItemPatch {
                title: Some("Vendor contracts (next quarter)".into()),
                ..ItemPatch::default()
            },
        )
        .unwrap();

    let loc = board.set_status(ItemId::new(3), ItemStatus::Open).unwrap();
    assert_eq!(loc, Location::Agenda(4));
    assert_eq!(board.items()[4].title, "Vendor contracts (next quarter)");
    assert_eq!(board.items()[4].order, 4);
}

#[test]
fn test_reparse_restarts_ids() {
    let parser = Parser::default();
    let mut board = Board::load(BRIEFING, &parser);
    board.set_status(ItemId::new(2), ItemStatus::Deferred).unwrap();
    board.reorder(0, 2).unwrap();

    board.reparse("- Only item", &parser);
    assert_eq!(board.len(), 1);
    assert!(board.parking_lot().is_empty());
    assert_eq!(board.items()[0].id, ItemId::FIRST);
    assert_eq!(board.items()[0].order, 0);
}

// === Export ===
#[test]
fn test_export_reflects_edits() {
    let mut board = Board::load(BRIEFING, &Parser::default());
    board.reorder(1, 0).unwrap();
    board.set_priority_level(ItemId::new(5), 1).unwrap();
    board.set_status(ItemId::new(4), ItemStatus::Deferred).unwrap();

    let meeting = MeetingId::from_bytes([7u8; 16]);
    let md = render_markdown(&board, &meeting);
    assert!(md.starts_with("# Meeting Agenda\n"));
    assert!(md.contains(&format!("**Meeting ID:** {meeting}")));
    assert!(md.contains("### 1. Budget Review\n**Priority:** High | **Status:** Open"));
    assert!(md.contains("### 2. Q4 Planning Briefing"));
    assert!(md.contains("### 4. Office plants\n**Priority:** Critical"));
    assert!(md.contains("## Parking Lot\n\n- Metrics review (Ongoing)\n"));
}

#[test]
fn test_export_writes_file() {
    let tmp = tempfile::tempdir().unwrap();
    let board = Board::load(BRIEFING, &Parser::default());
    let export = export_markdown(&board);
    let path = write_markdown(&export, tmp.path()).unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    assert_eq!(written, export.markdown);
    assert!(written.contains(&export.meeting_id.to_string()));
}
