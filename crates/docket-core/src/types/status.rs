use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Open,
    Discussed,
    Complete,
    Deferred,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 4] = [
        ItemStatus::Open,
        ItemStatus::Discussed,
        ItemStatus::Complete,
        ItemStatus::Deferred,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Open => "open",
            ItemStatus::Discussed => "discussed",
            ItemStatus::Complete => "complete",
            ItemStatus::Deferred => "deferred",
        }
    }

    /// Capitalized form used in rendered documents.
    pub fn display_label(&self) -> &'static str {
        match self {
            ItemStatus::Open => "Open",
            ItemStatus::Discussed => "Discussed",
            ItemStatus::Complete => "Complete",
            ItemStatus::Deferred => "Deferred",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(ItemStatus::Open),
            "discussed" => Ok(ItemStatus::Discussed),
            "complete" => Ok(ItemStatus::Complete),
            "deferred" => Ok(ItemStatus::Deferred),
            _ => Err(CoreError::UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_status_name() {
        for status in ItemStatus::ALL {
            assert_eq!(status.as_str().parse::<ItemStatus>().unwrap(), status);
        }
        assert_eq!("Deferred".parse::<ItemStatus>().unwrap(), ItemStatus::Deferred);
    }

    #[test]
    fn unknown_status_is_an_error() {
        assert!(matches!(
            "blocked".parse::<ItemStatus>(),
            Err(CoreError::UnknownStatus(_))
        ));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ItemStatus::Discussed).unwrap(),
            "\"discussed\""
        );
    }
}
