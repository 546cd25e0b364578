use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Priority record attached to every agenda item.
///
/// `level` is an ordinal where 1 is the most pressing tier. `color` is a
/// display token consumed by presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Priority {
    pub level: u8,
    pub color: String,
    pub label: String,
}

impl Priority {
    pub fn new(level: u8, color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            level,
            color: color.into(),
            label: label.into(),
        }
    }

    pub fn critical() -> Self {
        Self::new(1, "#dc2626", "Critical")
    }

    pub fn high() -> Self {
        Self::new(2, "#ea580c", "High")
    }

    pub fn medium() -> Self {
        Self::new(3, "#3b82f6", "Medium")
    }

    pub fn low() -> Self {
        Self::new(4, "#10b981", "Low")
    }

    pub fn ongoing() -> Self {
        Self::new(5, "#8b5cf6", "Ongoing")
    }

    /// Canonical tier for a numeric shortcut (1 = Critical .. 5 = Ongoing).
    pub fn from_level(level: u8) -> Result<Self, CoreError> {
        match level {
            1 => Ok(Self::critical()),
            2 => Ok(Self::high()),
            3 => Ok(Self::medium()),
            4 => Ok(Self::low()),
            5 => Ok(Self::ongoing()),
            other => Err(CoreError::InvalidPriorityLevel(other)),
        }
    }

    /// Canonical tier by name, case-insensitive.
    pub fn from_tier_name(name: &str) -> Result<Self, CoreError> {
        match name.trim().to_lowercase().as_str() {
            "critical" => Ok(Self::critical()),
            "high" => Ok(Self::high()),
            "medium" => Ok(Self::medium()),
            "low" => Ok(Self::low()),
            "ongoing" => Ok(Self::ongoing()),
            _ => Err(CoreError::UnknownTier(name.to_string())),
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::medium()
    }
}
