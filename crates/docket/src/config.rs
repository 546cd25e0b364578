use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use docket_core::{PriorityConfig, PriorityTable};
use docket_parse::{ParseOptions, Parser};

const CONFIG_ENV: &str = "DOCKET_CONFIG";

/// Contents of `config.toml`.
///
/// ```toml
/// [parser]
/// skip_blank_lines = false
///
/// [priorities]
/// default = "medium"
///
/// [[priorities.keyword]]
/// word = "BLOCKER"
/// tier = "critical"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocketConfig {
    #[serde(default)]
    pub parser: ParseOptions,
    #[serde(default)]
    pub priorities: PriorityConfig,
}

impl DocketConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let config: DocketConfig = toml::from_str(s)?;
        Ok(config)
    }

    pub fn read_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Resolve the config: an explicit path must exist, otherwise
    /// `$DOCKET_CONFIG`, then `<config dir>/docket/config.toml` if present,
    /// else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::read_from(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::read_from(Path::new(&path));
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::read_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn priority_table(&self) -> anyhow::Result<PriorityTable> {
        Ok(self.priorities.to_table()?)
    }

    pub fn build_parser(&self) -> anyhow::Result<Parser> {
        Ok(Parser::new(self.priority_table()?, self.parser.clone()))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("docket").join("config.toml"))
}
