//! Per-file import record: two classification buckets of root → names.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root module → names imported from it. An empty list means the whole module
/// was imported. Keys keep first-insertion order.
pub type ImportBucket = IndexMap<String, Vec<String>>;

/// Classification bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Standard,
    Custom,
}

impl ImportKind {
    pub fn from_standard(is_standard: bool) -> Self {
        if is_standard {
            ImportKind::Standard
        } else {
            ImportKind::Custom
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImportKind::Standard => "standard",
            ImportKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classified imports of one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileImportRecord {
    pub custom: ImportBucket,
    pub standard: ImportBucket,
}

impl FileImportRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self, kind: ImportKind) -> &ImportBucket {
        match kind {
            ImportKind::Standard => &self.standard,
            ImportKind::Custom => &self.custom,
        }
    }

    pub fn bucket_mut(&mut self, kind: ImportKind) -> &mut ImportBucket {
        match kind {
            ImportKind::Standard => &mut self.standard,
            ImportKind::Custom => &mut self.custom,
        }
    }

    /// Register one classified import.
    ///
    /// With names (`from root import a, b`): comma-joined groups are split and
    /// the names appended under `root`, creating the entry if needed.
    /// Without names (`import root` / `import a, b`): each comma-separated
    /// root is registered with an empty list unless already present.
    pub fn add(&mut self, root: &str, imported_names: &[String], is_standard: bool) {
        let bucket = self.bucket_mut(ImportKind::from_standard(is_standard));

        if imported_names.is_empty() {
            for root in root.split(',').map(squash).filter(|r| !r.is_empty()) {
                bucket.entry(root).or_default();
            }
            return;
        }

        let names = imported_names
            .iter()
            .flat_map(|group| group.split(','))
            .map(squash)
            .filter(|name| !name.is_empty());
        bucket.entry(root.to_string()).or_default().extend(names);
    }

    /// Merge another record for the same file: lists are concatenated,
    /// duplicates kept, new roots appended.
    pub fn extend(&mut self, other: FileImportRecord) {
        for (root, names) in other.standard {
            self.standard.entry(root).or_default().extend(names);
        }
        for (root, names) in other.custom {
            self.custom.entry(root).or_default().extend(names);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.custom.is_empty()
    }

    /// All imported names across both buckets, standard first.
    pub fn imported_names(&self) -> impl Iterator<Item = (ImportKind, &str)> {
        let standard = self
            .standard
            .values()
            .flatten()
            .map(|name| (ImportKind::Standard, name.as_str()));
        let custom = self
            .custom
            .values()
            .flatten()
            .map(|name| (ImportKind::Custom, name.as_str()));
        standard.chain(custom)
    }

    /// JSON with the given indentation width.
    pub fn to_json(&self, indent: usize) -> serde_json::Result<String> {
        super::to_json_indented(self, indent)
    }
}

fn squash(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_from_names_in_order() {
        let mut record = FileImportRecord::new();
        record.add("my.pkg", &names(&["a", "b"]), false);
        assert_eq!(record.custom["my.pkg"], names(&["a", "b"]));
        assert!(record.standard.is_empty());
    }

    #[test]
    fn test_add_splits_comma_groups() {
        let mut record = FileImportRecord::new();
        record.add("os", &names(&["path, sep", "getcwd"]), true);
        assert_eq!(record.standard["os"], names(&["path", "sep", "getcwd"]));
    }

    #[test]
    fn test_add_extends_existing_root() {
        let mut record = FileImportRecord::new();
        record.add("typing", &names(&["List"]), true);
        record.add("typing", &names(&["Dict", "List"]), true);
        assert_eq!(record.standard["typing"], names(&["List", "Dict", "List"]));
    }

    #[test]
    fn test_add_whole_module_is_idempotent() {
        let mut record = FileImportRecord::new();
        record.add("json", &names(&["loads"]), true);
        record.add("json", &[], true);
        assert_eq!(record.standard["json"], names(&["loads"]));

        record.add("os", &[], true);
        record.add("os", &[], true);
        assert_eq!(record.standard.len(), 2);
        assert!(record.standard["os"].is_empty());
    }

    #[test]
    fn test_add_multiple_roots_on_one_line() {
        let mut record = FileImportRecord::new();
        record.add("os,sys", &[], true);
        assert_eq!(record.standard.keys().collect::<Vec<_>>(), ["os", "sys"]);
    }

    #[test]
    fn test_extend_concatenates() {
        let mut first = FileImportRecord::new();
        first.add("a", &names(&["x"]), false);
        let mut second = FileImportRecord::new();
        second.add("a", &names(&["y"]), false);
        second.add("os", &[], true);

        first.extend(second);
        assert_eq!(first.custom["a"], names(&["x", "y"]));
        assert!(first.standard["os"].is_empty());
    }

    #[test]
    fn test_json_shape() {
        let mut record = FileImportRecord::new();
        record.add("custom", &names(&["awesome!", "great!"]), false);
        record.add("standard", &names(&["os", "pandas"]), true);
        let expected = "{\n\"custom\": {\n\"custom\": [\n\"awesome!\",\n\"great!\"\n]\n},\n\"standard\": {\n\"standard\": [\n\"os\",\n\"pandas\"\n]\n}\n}";
        assert_eq!(record.to_json(0).unwrap(), expected);
    }
}
