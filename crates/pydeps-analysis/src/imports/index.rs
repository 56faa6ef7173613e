//! Project-wide import index: file path → classified record, with queries.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::scanner::to_posix;

use super::record::{FileImportRecord, ImportKind};

/// A file importing a given root module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryMatch {
    pub file: String,
    pub import: String,
    #[serde(rename = "type")]
    pub kind: ImportKind,
}

/// A file importing a given name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleMatch {
    pub file: String,
    pub module: String,
    #[serde(rename = "type")]
    pub kind: ImportKind,
}

/// Insertion-ordered map of POSIX file path → [`FileImportRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectImportIndex {
    files: IndexMap<String, FileImportRecord>,
}

impl ProjectImportIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record for `path`, or merge it into the existing one.
    pub fn merge(&mut self, path: &str, record: FileImportRecord) {
        let path = to_posix(path);
        match self.files.get_mut(&path) {
            Some(existing) => {
                debug!(path = path.as_str(), "merging imports into existing record");
                existing.extend(record);
            }
            None => {
                self.files.insert(path, record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileImportRecord)> {
        self.files.iter().map(|(path, record)| (path.as_str(), record))
    }

    /// Record of the exact (POSIX-normalized) path.
    pub fn find_by_path(&self, path: &str) -> Option<&FileImportRecord> {
        self.files.get(&to_posix(path))
    }

    /// Every file importing the root `library`. Within a file the standard
    /// bucket is reported before the custom one.
    pub fn find_by_library(&self, library: &str) -> Vec<LibraryMatch> {
        let mut matches = Vec::new();
        for (path, record) in &self.files {
            for kind in [ImportKind::Standard, ImportKind::Custom] {
                if record.bucket(kind).contains_key(library) {
                    matches.push(LibraryMatch {
                        file: path.clone(),
                        import: library.to_string(),
                        kind,
                    });
                }
            }
        }
        matches
    }

    /// Every occurrence of the imported name `module` across files.
    pub fn find_by_module(&self, module: &str) -> Vec<ModuleMatch> {
        let mut matches = Vec::new();
        for (path, record) in &self.files {
            for (kind, name) in record.imported_names() {
                if name == module {
                    matches.push(ModuleMatch {
                        file: path.clone(),
                        module: module.to_string(),
                        kind,
                    });
                }
            }
        }
        matches
    }

    /// First `n` entries in insertion order.
    pub fn peek(&self, n: usize) -> Vec<(&str, &FileImportRecord)> {
        self.iter().take(n).collect()
    }

    /// First `n` entries as a JSON object indented by four spaces.
    pub fn peek_json(&self, n: usize) -> serde_json::Result<String> {
        let head: IndexMap<&str, &FileImportRecord> = self.iter().take(n).collect();
        super::to_json_indented(&head, 4)
    }

    /// Every indexed path, optionally sorted.
    pub fn all_paths(&self, sorted: bool) -> Vec<String> {
        let mut paths: Vec<String> = self.files.keys().cloned().collect();
        if sorted {
            paths.sort();
        }
        paths
    }
}
