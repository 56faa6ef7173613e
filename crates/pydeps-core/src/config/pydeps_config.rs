use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassifyConfig, GraphConfig, ScanConfig};
use crate::errors::ConfigError;

/// Config file looked up under the project root.
pub const CONFIG_FILE_NAME: &str = "pydeps.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PydepsConfig {
    pub scan: ScanConfig,
    pub classify: ClassifyConfig,
    pub graph: GraphConfig,
}

impl PydepsConfig {
    /// Parse a TOML document. Missing sections and keys fall back to defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: PydepsConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a project.
    ///
    /// `explicit` wins when given and must exist. Otherwise `pydeps.toml` under
    /// `root` is used if present, and defaults if not.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    tracing::debug!(root = %root.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let source = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_toml(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.extension.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scan.extension",
                message: "extension cannot be empty".to_string(),
            });
        }
        if self.scan.statement_cache_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scan.statement_cache_capacity",
                message: "capacity must be positive".to_string(),
            });
        }
        if self.classify.cache_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "classify.cache_capacity",
                message: "capacity must be positive".to_string(),
            });
        }
        Ok(())
    }
}
