//! Parallel file walker using the `ignore` crate's `WalkParallel`.
//!
//! Default ignore patterns skip virtualenvs, caches and build output so a
//! project scan never wanders into installed third-party code.

use std::path::{Path, PathBuf};

use crossbeam_channel as channel;
use ignore::overrides::{Override, OverrideBuilder};
use pydeps_core::config::ScanConfig;
use pydeps_core::errors::ScanError;

use super::filter::accept;

/// Directories skipped on every scan when `use_default_ignores` is set.
pub const DEFAULT_IGNORES: &[&str] = &[
    ".git",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    ".tox",
    ".nox",
    ".venv",
    "venv",
    "node_modules",
    "build",
    "dist",
    "*.egg-info",
];

/// Lists candidate source files under a root directory.
pub trait FileCollector: Send + Sync {
    /// Returns deduplicated POSIX paths, sorted for deterministic output.
    fn collect_files(
        &self,
        root: &Path,
        extension: &str,
        exclude_prefix: Option<&str>,
        exclude_suffix: Option<&str>,
    ) -> Result<Vec<String>, ScanError>;
}

/// [`FileCollector`] backed by a parallel directory walk.
pub struct WalkCollector {
    config: ScanConfig,
}

impl WalkCollector {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let (tx, rx) = channel::unbounded();

        let mut builder = ignore::WalkBuilder::new(root);
        builder
            .hidden(false)
            .parents(self.config.respect_gitignore)
            .ignore(self.config.respect_gitignore)
            .git_ignore(self.config.respect_gitignore)
            .git_global(self.config.respect_gitignore)
            .git_exclude(self.config.respect_gitignore)
            .follow_links(self.config.follow_symlinks);

        let (overrides, _rejected) = ignore_overrides(root, &self.config);
        if let Some(overrides) = overrides {
            builder.overrides(overrides);
        }

        builder.build_parallel().run(|| {
            let tx = tx.clone();
            Box::new(move |entry| {
                let entry = match entry {
                    Ok(e) => e,
                    Err(_) => return ignore::WalkState::Continue,
                };
                if entry.file_type().is_some_and(|ft| ft.is_file()) {
                    let _ = tx.send(entry.into_path());
                }
                ignore::WalkState::Continue
            })
        });

        drop(tx);
        rx.into_iter().collect()
    }
}

/// Negated overrides for the default and configured ignore patterns.
/// Returns the overrides (if they build) and every pattern that was rejected.
fn ignore_overrides(root: &Path, config: &ScanConfig) -> (Option<Override>, Vec<String>) {
    let mut builder = OverrideBuilder::new(root);
    let mut rejected = Vec::new();
    let defaults: &[&str] = if config.use_default_ignores {
        DEFAULT_IGNORES
    } else {
        &[]
    };

    // `!dir/**` ignores a directory's contents, `!dir` the entry itself.
    let patterns = defaults
        .iter()
        .flat_map(|dir| [(*dir, format!("!{dir}/**")), (*dir, format!("!{dir}"))])
        .chain(config.extra_ignore.iter().map(|p| (p.as_str(), format!("!{p}"))));
    for (pattern, glob) in patterns {
        if let Err(e) = builder.add(&glob) {
            tracing::warn!(pattern, error = %e, "skipping invalid ignore pattern");
            if !rejected.iter().any(|r| r == pattern) {
                rejected.push(pattern.to_string());
            }
        }
    }

    match builder.build() {
        Ok(built) => (Some(built), rejected),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring invalid ignore patterns");
            (None, rejected)
        }
    }
}

impl Default for WalkCollector {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

impl FileCollector for WalkCollector {
    fn collect_files(
        &self,
        root: &Path,
        extension: &str,
        exclude_prefix: Option<&str>,
        exclude_suffix: Option<&str>,
    ) -> Result<Vec<String>, ScanError> {
        if extension.trim().is_empty() {
            return Err(ScanError::InvalidArgument {
                message: "extension cannot be empty".to_string(),
            });
        }
        if !root.is_dir() {
            return Err(ScanError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut files = Vec::new();
        for path in self.walk(root) {
            match accept(&path, Some(extension), exclude_prefix, exclude_suffix) {
                Ok(Some(posix)) => files.push(posix),
                Ok(None) => {}
                Err(ScanError::TypeMismatch { path, found }) => {
                    tracing::warn!(path = %path.display(), found, "skipping file with non-text name");
                }
                Err(e) => return Err(e),
            }
        }

        // Sort + dedup for deterministic output
        files.sort();
        files.dedup();
        tracing::debug!(root = %root.display(), count = files.len(), "collected files");
        Ok(files)
    }
}
