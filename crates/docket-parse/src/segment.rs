use regex::Regex;
use std::sync::OnceLock;

static NUMBERED_RE: OnceLock<Regex> = OnceLock::new();
static BULLET_RE: OnceLock<Regex> = OnceLock::new();
static HEADER_RE: OnceLock<Regex> = OnceLock::new();

fn numbered_re() -> &'static Regex {
    NUMBERED_RE.get_or_init(|| Regex::new(r"^([0-9]+)\.\s+(.+)").expect("numbered marker pattern"))
}

fn bullet_re() -> &'static Regex {
    BULLET_RE.get_or_init(|| Regex::new(r"^[*\-]\s+(.+)").expect("bullet marker pattern"))
}

fn header_re() -> &'static Regex {
    HEADER_RE.get_or_init(|| Regex::new(r"^#+\s*(.+)").expect("header marker pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `1. Title`
    Numbered,
    /// `- Title` or `* Title`
    Bullet,
    /// `## Title`
    Header,
}

/// A trimmed input line and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Starts a new item. `text` is the captured remainder after the marker.
    Marker { kind: MarkerKind, text: &'a str },
    /// Attaches to the currently open item.
    Continuation(&'a str),
    /// Only produced when blank lines are kept.
    Blank,
}

/// Classify one trimmed, non-empty line.
///
/// Numbered beats bullet beats header; the first pattern that matches wins.
pub fn classify_line(line: &str) -> Line<'_> {
    if let Some(caps) = numbered_re().captures(line) {
        if let Some(m) = caps.get(2) {
            return Line::Marker {
                kind: MarkerKind::Numbered,
                text: m.as_str(),
            };
        }
    }
    if let Some(m) = bullet_re().captures(line).and_then(|c| c.get(1)) {
        return Line::Marker {
            kind: MarkerKind::Bullet,
            text: m.as_str(),
        };
    }
    if let Some(m) = header_re().captures(line).and_then(|c| c.get(1)) {
        return Line::Marker {
            kind: MarkerKind::Header,
            text: m.as_str(),
        };
    }
    Line::Continuation(line)
}

/// Split raw text into trimmed, classified lines.
///
/// With `skip_blank_lines` set, empty lines are dropped before
/// classification; otherwise each one becomes [`Line::Blank`].
pub fn segment(text: &str, skip_blank_lines: bool) -> Vec<Line<'_>> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| {
            if line.is_empty() {
                (!skip_blank_lines).then_some(Line::Blank)
            } else {
                Some(classify_line(line))
            }
        })
        .collect()
}
