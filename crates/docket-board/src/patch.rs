use docket_core::{AgendaItem, Priority};
use serde::{Deserialize, Serialize};

/// Field edits applied to an item. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rationale: Option<String>,
    pub target_outcome: Option<String>,
    pub priority: Option<Priority>,
}

impl ItemPatch {
    /// Produce the edited copy of `item`; `id`, `status` and `order` are
    /// never touched.
    pub fn apply_to(&self, item: &AgendaItem) -> AgendaItem {
        let mut next = item.clone();
        if let Some(title) = &self.title {
            next.title = title.clone();
        }
        if let Some(description) = &self.description {
            next.description = description.clone();
        }
        if let Some(rationale) = &self.rationale {
            next.rationale = rationale.clone();
        }
        if let Some(target_outcome) = &self.target_outcome {
            next.target_outcome = target_outcome.clone();
        }
        if let Some(priority) = &self.priority {
            next.priority = priority.clone();
        }
        next
    }
}
