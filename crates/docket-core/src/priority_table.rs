use serde::{Deserialize, Serialize};

use crate::types::Priority;
use crate::CoreError;

/// Ordered keyword → priority mapping consulted by the classifier.
///
/// Order is significant: when a fragment contains several keywords, the
/// entry listed first wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    entries: Vec<(String, Priority)>,
    default: Priority,
}

/// One keyword row as written in a TOML config file.
///
/// Either `tier` names a canonical tier, or `level` is given (optionally
/// with a custom `color`/`label`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl KeywordEntry {
    pub fn to_priority(&self) -> Result<Priority, CoreError> {
        if let Some(tier) = &self.tier {
            return Priority::from_tier_name(tier);
        }
        let level = self.level.ok_or_else(|| {
            CoreError::Config(format!("keyword '{}' needs a tier or a level", self.word))
        })?;
        match (&self.color, &self.label) {
            (Some(color), Some(label)) => Ok(Priority::new(level, color.clone(), label.clone())),
            _ => Priority::from_level(level),
        }
    }
}

/// The `[priorities]` section of a config file:
///
/// ```toml
/// default = "medium"
///
/// [[keyword]]
/// word = "BLOCKER"
/// tier = "critical"
/// ```
///
/// Listing any keyword replaces the built-in table; with no keywords only
/// the default tier changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub keyword: Vec<KeywordEntry>,
}

impl PriorityConfig {
    pub fn to_table(&self) -> Result<PriorityTable, CoreError> {
        let default = match self.default.as_deref() {
            Some(name) => Priority::from_tier_name(name)?,
            None => Priority::default(),
        };
        if self.keyword.is_empty() {
            return Ok(PriorityTable::standard().with_default(default));
        }
        PriorityTable::from_entries(&self.keyword, default)
    }
}

impl PriorityTable {
    pub fn new(default: Priority) -> Self {
        Self {
            entries: Vec::new(),
            default,
        }
    }

    /// The built-in mapping: CRITICAL/IMMEDIATE/TODAY, URGENT/HIGH/IMPORTANT,
    /// MEDIUM/NORMAL, LOW/MINOR, ONGOING/RECURRING.
    pub fn standard() -> Self {
        let mut table = Self::new(Priority::medium());
        for word in ["CRITICAL", "IMMEDIATE", "TODAY"] {
            table.push(word, Priority::critical());
        }
        for word in ["URGENT", "HIGH", "IMPORTANT"] {
            table.push(word, Priority::high());
        }
        for word in ["MEDIUM", "NORMAL"] {
            table.push(word, Priority::medium());
        }
        for word in ["LOW", "MINOR"] {
            table.push(word, Priority::low());
        }
        for word in ["ONGOING", "RECURRING"] {
            table.push(word, Priority::ongoing());
        }
        table
    }

    /// Same keywords, different fallback tier.
    pub fn with_default(mut self, default: Priority) -> Self {
        self.default = default;
        self
    }

    /// Build a table from config rows, preserving their order.
    pub fn from_entries(entries: &[KeywordEntry], default: Priority) -> Result<Self, CoreError> {
        let mut table = Self::new(default);
        for entry in entries {
            if entry.word.trim().is_empty() {
                return Err(CoreError::Config("empty priority keyword".into()));
            }
            table.push(&entry.word, entry.to_priority()?);
        }
        Ok(table)
    }

    /// Append a mapping. Keywords are stored uppercase.
    pub fn push(&mut self, keyword: &str, priority: Priority) {
        self.entries.push((keyword.trim().to_uppercase(), priority));
    }

    pub fn entries(&self) -> &[(String, Priority)] {
        &self.entries
    }

    pub fn default_priority(&self) -> &Priority {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::standard()
    }
}
