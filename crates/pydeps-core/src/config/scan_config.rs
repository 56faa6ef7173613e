use serde::{Deserialize, Serialize};

/// File collection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Suffix a path must end with to be scanned.
    pub extension: String,
    /// Skip files whose name starts with this (e.g. `"__"` drops `__init__.py`).
    pub exclude_prefix: Option<String>,
    /// Skip files whose name ends with this.
    pub exclude_suffix: Option<String>,
    /// Honor `.gitignore` files while walking.
    pub respect_gitignore: bool,
    pub follow_symlinks: bool,
    /// Skip virtualenvs, caches and build output directories.
    pub use_default_ignores: bool,
    /// Extra gitignore-style patterns to exclude.
    pub extra_ignore: Vec<String>,
    /// Distinct file contents whose import statements are memoized.
    pub statement_cache_capacity: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: ".py".to_string(),
            exclude_prefix: None,
            exclude_suffix: None,
            respect_gitignore: false,
            follow_symlinks: false,
            use_default_ignores: true,
            extra_ignore: Vec::new(),
            statement_cache_capacity: 4096,
        }
    }
}

impl ScanConfig {
    /// Blank exclusion strings behave as if unset.
    pub fn effective_exclude_prefix(&self) -> Option<&str> {
        self.exclude_prefix.as_deref().filter(|s| !s.is_empty())
    }

    pub fn effective_exclude_suffix(&self) -> Option<&str> {
        self.exclude_suffix.as_deref().filter(|s| !s.is_empty())
    }
}
