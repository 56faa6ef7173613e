//! Independent standard-library signals.
//!
//! Each signal answers one question about a bare top-level module name. The
//! classifier ORs them together, so any signal can be swapped for a
//! precomputed allow-list without touching the others.

use std::fs;
use std::path::{Path, PathBuf};

use moka::sync::Cache;
use pydeps_core::types::collections::FxHashSet;

use super::stdlib::{BUILTIN_MODULE_NAMES, STDLIB_MODULE_NAMES};

/// File suffixes of compiled extension modules.
const EXTENSION_SUFFIXES: &[&str] = &[".so", ".pyd"];

/// One standard-library predicate over a bare module name.
pub trait StandardLibrarySignal: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    fn is_standard(&self, module: &str) -> bool;
}

/// Fixed set of module names.
#[derive(Debug, Clone)]
pub struct AllowList {
    label: &'static str,
    names: FxHashSet<String>,
}

impl AllowList {
    pub fn new<I, S>(label: &'static str, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Modules compiled into the interpreter; always importable.
    pub fn builtin_modules() -> Self {
        Self::new("builtin", BUILTIN_MODULE_NAMES.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl StandardLibrarySignal for AllowList {
    fn name(&self) -> &'static str {
        self.label
    }

    fn is_standard(&self, module: &str) -> bool {
        self.names.contains(module)
    }
}

/// Modules importable without the project: the standard library plus whatever
/// is installed under the configured search paths.
#[derive(Debug, Clone)]
pub struct ImportableNamespace {
    names: FxHashSet<String>,
}

impl ImportableNamespace {
    /// Standard library names only.
    pub fn stdlib() -> Self {
        Self {
            names: STDLIB_MODULE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Standard library names plus modules discovered under `search_paths`.
    /// Unreadable directories are logged and skipped.
    pub fn discover(search_paths: &[PathBuf]) -> Self {
        let mut namespace = Self::stdlib();
        for dir in search_paths {
            let before = namespace.names.len();
            match fs::read_dir(dir) {
                Ok(entries) => {
                    for entry in entries.flatten() {
                        if let Some(name) = module_name_of(&entry.path()) {
                            namespace.names.insert(name);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %dir.display(), error = %e, "cannot read module search path");
                    continue;
                }
            }
            tracing::debug!(
                path = %dir.display(),
                added = namespace.names.len() - before,
                "discovered importable modules"
            );
        }
        namespace
    }

    pub fn contains(&self, module: &str) -> bool {
        self.names.contains(module)
    }
}

impl StandardLibrarySignal for ImportableNamespace {
    fn name(&self) -> &'static str {
        "importable"
    }

    fn is_standard(&self, module: &str) -> bool {
        self.contains(module)
    }
}

/// Module name a search-path entry provides, if any: `x.py`, a package
/// directory with `__init__.py`, or an extension module `x.cpython-312-*.so`.
fn module_name_of(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let name = if path.is_dir() {
        if !path.join("__init__.py").is_file() {
            return None;
        }
        file_name
    } else if let Some(stem) = file_name.strip_suffix(".py") {
        stem
    } else if EXTENSION_SUFFIXES.iter().any(|suffix| file_name.ends_with(suffix)) {
        file_name.split('.').next()?
    } else {
        return None;
    };

    is_identifier(name).then(|| name.to_string())
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Installed distribution metadata: a module is standard when the
/// `*.dist-info/METADATA` of the distribution named after it declares the
/// platform distribution (`Name: Python`).
#[derive(Debug, Clone)]
pub struct DistributionMetadata {
    search_paths: Vec<PathBuf>,
    distribution_name: String,
}

impl DistributionMetadata {
    pub fn new(search_paths: Vec<PathBuf>, distribution_name: impl Into<String>) -> Self {
        Self {
            search_paths,
            distribution_name: distribution_name.into(),
        }
    }

    /// `Name:` header of the installed distribution matching `module`.
    pub fn distribution_name_of(&self, module: &str) -> Option<String> {
        let wanted = normalize_distribution(module);
        for dir in &self.search_paths {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let file_name = entry.file_name();
                let Some(stem) = file_name.to_str().and_then(|n| n.strip_suffix(".dist-info")) else {
                    continue;
                };
                let dist = stem.split('-').next().unwrap_or(stem);
                if normalize_distribution(dist) != wanted {
                    continue;
                }
                let metadata = entry.path().join("METADATA");
                match fs::read_to_string(&metadata) {
                    Ok(text) => return metadata_name(&text),
                    Err(e) => {
                        tracing::warn!(path = %metadata.display(), error = %e, "unreadable distribution metadata");
                    }
                }
            }
        }
        None
    }
}

impl StandardLibrarySignal for DistributionMetadata {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn is_standard(&self, module: &str) -> bool {
        self.distribution_name_of(module)
            .is_some_and(|name| name == self.distribution_name)
    }
}

/// PEP 503 style normalization: case-folded, runs of `-_.` become `_`.
fn normalize_distribution(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_sep = false;
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !last_sep {
                out.push('_');
            }
            last_sep = true;
        } else {
            out.extend(c.to_lowercase());
            last_sep = false;
        }
    }
    out
}

/// Value of the first `Name:` header in a core metadata document.
fn metadata_name(text: &str) -> Option<String> {
    text.lines()
        .take_while(|line| !line.is_empty())
        .find_map(|line| line.strip_prefix("Name:"))
        .map(|value| value.trim().to_string())
}

/// A signal with its own per-module memo.
pub struct CachedSignal {
    signal: Box<dyn StandardLibrarySignal>,
    cache: Cache<String, bool>,
}

impl CachedSignal {
    pub fn new(signal: Box<dyn StandardLibrarySignal>, capacity: u64) -> Self {
        Self {
            signal,
            cache: Cache::new(capacity),
        }
    }

    pub fn name(&self) -> &'static str {
        self.signal.name()
    }

    pub fn is_standard(&self, module: &str) -> bool {
        if let Some(hit) = self.cache.get(module) {
            return hit;
        }
        let verdict = self.signal.is_standard(module);
        tracing::trace!(signal = self.signal.name(), module, verdict, "signal evaluated");
        self.cache.insert(module.to_string(), verdict);
        verdict
    }

    /// Number of memoized module names.
    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
