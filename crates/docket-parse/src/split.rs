use regex::Regex;
use std::sync::OnceLock;

static ANNOTATION_RE: OnceLock<Regex> = OnceLock::new();

/// Inline title/description delimiters, tried in order.
const DELIMITERS: [&str; 2] = [" - ", ": "];

/// Separate a marker's captured text into `(title, inline description)`.
///
/// The first delimiter present wins and the text is split at its first
/// occurrence; later occurrences stay in the description. The title is not
/// cleaned here, see [`strip_annotations`].
pub fn split_title(raw: &str) -> (&str, &str) {
    for delimiter in DELIMITERS {
        if let Some((title, description)) = raw.split_once(delimiter) {
            return (title, description);
        }
    }
    (raw, "")
}

/// Remove `[...]` annotations such as `[URGENT]` and trim the result.
pub fn strip_annotations(title: &str) -> String {
    let re = ANNOTATION_RE.get_or_init(|| Regex::new(r"\[.*?\]").expect("annotation pattern"));
    re.replace_all(title, "").trim().to_string()
}
