use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Standard-library detection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Directories searched for importable modules and `*.dist-info` metadata,
    /// typically the interpreter's `site-packages`.
    pub search_paths: Vec<PathBuf>,
    /// Distribution name that marks a package as part of the platform itself.
    pub distribution_name: String,
    /// Per-signal memoization capacity.
    pub cache_capacity: u64,
    /// Module names always treated as standard.
    pub extra_standard_modules: Vec<String>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            distribution_name: "Python".to_string(),
            cache_capacity: 1024,
            extra_standard_modules: Vec::new(),
        }
    }
}
