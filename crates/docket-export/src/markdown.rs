use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use docket_board::Board;
use docket_core::{AgendaItem, MeetingId};

use crate::ExportError;

/// A rendered agenda document and the meeting id stamped on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownExport {
    pub markdown: String,
    pub meeting_id: MeetingId,
}

/// Render the board under a freshly minted meeting id.
pub fn export_markdown(board: &Board) -> MarkdownExport {
    let meeting_id = MeetingId::new();
    MarkdownExport {
        markdown: render_markdown(board, &meeting_id),
        meeting_id,
    }
}

pub fn download_filename(meeting_id: &MeetingId) -> String {
    format!("agenda-{meeting_id}.md")
}

/// Write an export to `target`. A directory target gets the default
/// download filename inside it. Returns the path written.
pub fn write_markdown(export: &MarkdownExport, target: &Path) -> Result<PathBuf, ExportError> {
    let path = if target.is_dir() {
        target.join(download_filename(&export.meeting_id))
    } else {
        target.to_path_buf()
    };
    std::fs::write(&path, &export.markdown).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = export.markdown.len(), "wrote agenda");
    Ok(path)
}

pub fn render_markdown(board: &Board, meeting_id: &MeetingId) -> String {
    let mut out = String::new();
    out.push_str("# Meeting Agenda\n\n");
    let _ = writeln!(out, "**Meeting ID:** {meeting_id}\n");
    out.push_str("## Agenda Items\n\n");

    if board.is_empty() {
        out.push_str("_No agenda items._\n");
    }
    for (index, item) in board.items().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        render_item(&mut out, index + 1, item);
    }

    if !board.parking_lot().is_empty() {
        out.push_str("\n## Parking Lot\n\n");
        for item in board.parking_lot() {
            let _ = writeln!(out, "- {} ({})", item.title, item.priority.label);
            if !item.description.is_empty() {
                let _ = writeln!(out, "  {}", item.description);
            }
        }
    }
    out
}

fn render_item(out: &mut String, number: usize, item: &AgendaItem) {
    let _ = writeln!(out, "### {number}. {}", item.title);
    let _ = writeln!(
        out,
        "**Priority:** {} | **Status:** {}",
        item.priority.label,
        item.status.display_label()
    );
    if !item.description.is_empty() {
        let _ = writeln!(out, "\n{}", item.description);
    }
    if !item.rationale.is_empty() {
        let _ = writeln!(out, "\n**Rationale:** {}", item.rationale);
    }
    if !item.target_outcome.is_empty() {
        let _ = writeln!(out, "\n**Target Outcome:** {}", item.target_outcome);
    }
}
