use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use docket_board::Board;
use docket_core::{ItemId, ItemStatus};
use docket_export::{export_markdown, write_markdown};

use crate::commands::ParserFlags;
use crate::input::read_briefing;

#[derive(Args)]
pub struct ExportArgs {
    /// Briefing file (.txt or .md); reads stdin when omitted or `-`
    file: Option<PathBuf>,
    /// Write the Markdown here (a directory gets agenda-<meeting id>.md)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Move an item, by 1-based positions, before exporting
    #[arg(long = "move", value_name = "FROM:TO", value_parser = parse_move)]
    moves: Vec<(usize, usize)>,
    /// Set an item's priority level (1 = Critical .. 5 = Ongoing)
    #[arg(long = "priority", value_name = "ID=LEVEL", value_parser = parse_priority)]
    priorities: Vec<(ItemId, u8)>,
    /// Set an item's status (open, discussed, complete, deferred)
    #[arg(long = "status", value_name = "ID=STATUS", value_parser = parse_status)]
    statuses: Vec<(ItemId, ItemStatus)>,
    /// Move an item to the parking lot
    #[arg(long = "defer", value_name = "ID")]
    defer: Vec<ItemId>,
    /// Print the edited agenda as JSON instead of Markdown
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    parser: ParserFlags,
}

pub fn run(args: ExportArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let parser = args.parser.build_parser(config)?;
    let text = read_briefing(args.file.as_deref())?;
    let mut board = Board::load(&text, &parser);

    apply_edits(&mut board, &args)?;

    if args.json {
        let output = serde_json::json!({
            "items": board.items(),
            "parkingLot": board.parking_lot(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let export = export_markdown(&board);
    match &args.out {
        Some(target) => {
            let path = write_markdown(&export, target)?;
            println!("Exported {} to {}", export.meeting_id, path.display());
        }
        None => print!("{}", export.markdown),
    }
    Ok(())
}

/// Apply edits in a fixed order: moves, priorities, statuses, deferrals.
fn apply_edits(board: &mut Board, args: &ExportArgs) -> anyhow::Result<()> {
    for &(from, to) in &args.moves {
        board
            .reorder(from - 1, to - 1)
            .with_context(|| format!("moving {from}:{to}"))?;
    }
    for &(id, level) in &args.priorities {
        board.set_priority_level(id, level)?;
    }
    for &(id, status) in &args.statuses {
        board.set_status(id, status)?;
    }
    for &id in &args.defer {
        board.set_status(id, ItemStatus::Deferred)?;
    }
    tracing::debug!(
        items = board.len(),
        parked = board.parking_lot().len(),
        "applied edits"
    );
    Ok(())
}

fn parse_move(s: &str) -> Result<(usize, usize), String> {
    let (from, to) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{s}'"))?;
    let parse = |v: &str| -> Result<usize, String> {
        match v.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(format!("positions start at 1, got '{v}'")),
        }
    };
    Ok((parse(from)?, parse(to)?))
}

fn parse_priority(s: &str) -> Result<(ItemId, u8), String> {
    let (id, level) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=LEVEL, got '{s}'"))?;
    let id: ItemId = id.trim().parse().map_err(|e| format!("{e}"))?;
    let level: u8 = level
        .trim()
        .parse()
        .map_err(|_| format!("invalid level '{level}'"))?;
    Ok((id, level))
}

fn parse_status(s: &str) -> Result<(ItemId, ItemStatus), String> {
    let (id, status) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=STATUS, got '{s}'"))?;
    let id: ItemId = id.trim().parse().map_err(|e| format!("{e}"))?;
    let status: ItemStatus = status.parse().map_err(|e| format!("{e}"))?;
    Ok((id, status))
}
