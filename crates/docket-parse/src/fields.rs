use docket_core::AgendaItem;

/// A labeled continuation line and the field it overwrites.
pub struct FieldRule {
    /// Lowercase prefixes, including the trailing colon.
    pub labels: &'static [&'static str],
    /// Whether this label counts as a rationale/outcome label for
    /// [`ParseOptions::accumulate_after_labels`](crate::ParseOptions).
    pub closes_description: bool,
    pub apply: fn(&mut AgendaItem, &str),
}

fn set_rationale(item: &mut AgendaItem, value: &str) {
    item.rationale = value.to_string();
}

fn set_target_outcome(item: &mut AgendaItem, value: &str) {
    item.target_outcome = value.to_string();
}

fn set_description(item: &mut AgendaItem, value: &str) {
    item.description = value.to_string();
}

/// Label rules in precedence order. A match overwrites the field, so the
/// last occurrence of a repeated label wins.
pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        labels: &["rationale:"],
        closes_description: true,
        apply: set_rationale,
    },
    FieldRule {
        labels: &["target outcome:", "outcome:"],
        closes_description: true,
        apply: set_target_outcome,
    },
    FieldRule {
        labels: &["description:"],
        closes_description: false,
        apply: set_description,
    },
];

fn strip_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let head = line.as_bytes().get(..label.len())?;
    // Labels are ASCII, so a case-insensitive byte match ends on a char boundary.
    head.eq_ignore_ascii_case(label.as_bytes())
        .then(|| &line[label.len()..])
}

/// Find the first rule whose label starts `line`, returning the rule and the
/// trimmed value after the label's colon.
pub fn match_label(line: &str) -> Option<(&'static FieldRule, &str)> {
    FIELD_RULES.iter().find_map(|rule| {
        rule.labels
            .iter()
            .find_map(|label| strip_label(line, label))
            .map(|rest| (rule, rest.trim()))
    })
}

/// Append an unlabeled line to a description.
pub fn append_description(item: &mut AgendaItem, line: &str, separator: &str) {
    if !item.description.is_empty() {
        item.description.push_str(separator);
    }
    item.description.push_str(line.trim());
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_core::{ItemId, Priority};

    fn item() -> AgendaItem {
        AgendaItem::new(ItemId::FIRST, "Budget", Priority::default(), 0)
    }

    #[test]
    fn matches_labels_case_insensitively() {
        let (rule, value) = match_label("RATIONALE:   Q4 spend").unwrap();
        assert_eq!(value, "Q4 spend");
        let mut it = item();
        (rule.apply)(&mut it, value);
        assert_eq!(it.rationale, "Q4 spend");
    }

    #[test]
    fn both_outcome_labels_set_target_outcome() {
        for line in ["Target Outcome: Approved", "outcome: Approved"] {
            let (rule, value) = match_label(line).unwrap();
            let mut it = item();
            (rule.apply)(&mut it, value);
            assert_eq!(it.target_outcome, "Approved");
        }
    }

    #[test]
    fn description_label_overwrites() {
        let mut it = item();
        it.description = "inline".into();
        let (rule, value) = match_label("Description: replaced").unwrap();
        (rule.apply)(&mut it, value);
        assert_eq!(it.description, "replaced");
        assert!(!rule.closes_description);
    }

    #[test]
    fn label_must_be_a_prefix() {
        assert!(match_label("The rationale: unclear").is_none());
        assert!(match_label("Rationale without colon").is_none());
        assert!(match_label("").is_none());
    }

    #[test]
    fn non_ascii_line_does_not_panic() {
        assert!(match_label("Ünïcödé rationale: x").is_none());
        assert!(match_label("é").is_none());
    }

    #[test]
    fn append_uses_separator_only_between_parts() {
        let mut it = item();
        append_description(&mut it, "first", " ");
        append_description(&mut it, " second ", " ");
        assert_eq!(it.description, "first second");
    }
}
