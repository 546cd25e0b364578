use serde::{Deserialize, Serialize};

use crate::id::ItemId;
use crate::types::{ItemStatus, Priority};

/// One entry of a parsed agenda.
///
/// Items are values: edits produce a new `AgendaItem` rather than mutating
/// one shared between collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub target_outcome: String,
    pub priority: Priority,
    #[serde(default)]
    pub status: ItemStatus,
    pub order: usize,
}

impl AgendaItem {
    /// A fresh, open item with empty text fields.
    pub fn new(id: ItemId, title: impl Into<String>, priority: Priority, order: usize) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            rationale: String::new(),
            target_outcome: String::new(),
            priority,
            status: ItemStatus::Open,
            order,
        }
    }

    pub fn with_status(&self, status: ItemStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

}
