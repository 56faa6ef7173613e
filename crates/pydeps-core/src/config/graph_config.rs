use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which classification bucket(s) feed the dependency graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFilter {
    Standard,
    Custom,
    #[default]
    All,
}

impl ImportFilter {
    pub fn name(&self) -> &'static str {
        match self {
            ImportFilter::Standard => "standard",
            ImportFilter::Custom => "custom",
            ImportFilter::All => "all",
        }
    }
}

impl fmt::Display for ImportFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImportFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ImportFilter::Standard),
            "custom" => Ok(ImportFilter::Custom),
            "all" => Ok(ImportFilter::All),
            other => Err(ConfigError::InvalidValue {
                field: "graph.import_filter",
                message: format!("expected standard, custom or all, got {other:?}"),
            }),
        }
    }
}

/// Graph construction settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub import_filter: ImportFilter,
    /// Literal substring removed from file paths before they become graph nodes.
    pub strip_prefix: Option<String>,
    /// Row/column limit for the adjacency matrix. 0 disables truncation.
    pub top_n: usize,
    /// Build the graph right after scanning.
    pub autobuild: bool,
}
