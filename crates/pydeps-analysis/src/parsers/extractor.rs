//! ImportExtractor: line recognition memoized per file content.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::trace;

use super::statement::extract_imports;
use super::traits::ImportParser;
use crate::scanner::hasher::hash_content;

/// Statement lists kept when no capacity is configured.
pub const DEFAULT_STATEMENT_CACHE_CAPACITY: u64 = 4096;

/// Default [`ImportParser`]. Files with identical content (vendored copies,
/// generated `__init__.py` files, rescans) are recognized once.
pub struct ImportExtractor {
    statements: Cache<u64, Arc<Vec<String>>>,
}

impl ImportExtractor {
    pub fn new(capacity: u64) -> Self {
        Self {
            statements: Cache::new(capacity),
        }
    }

    /// Import statements of `source`, recognized on first sight of its content.
    pub fn extract(&self, source: &str) -> Arc<Vec<String>> {
        let content_hash = hash_content(source.as_bytes());
        if let Some(statements) = self.statements.get(&content_hash) {
            trace!(content_hash, statements = statements.len(), "statement cache hit");
            return statements;
        }

        let statements = Arc::new(extract_imports(source));
        trace!(content_hash, statements = statements.len(), "statement cache miss");
        self.statements.insert(content_hash, Arc::clone(&statements));
        statements
    }

    /// Distinct file contents currently memoized.
    pub fn cached_contents(&self) -> u64 {
        self.statements.run_pending_tasks();
        self.statements.entry_count()
    }
}

impl Default for ImportExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_STATEMENT_CACHE_CAPACITY)
    }
}

impl ImportParser for ImportExtractor {
    fn extract_imports(&self, source: &str) -> Vec<String> {
        self.extract(source).as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_content_recognized_once() {
        let extractor = ImportExtractor::default();
        let source = "import os\nfrom sys import argv\n";
        let first = extractor.extract(source);
        let second = extractor.extract(source);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(extractor.cached_contents(), 1);
    }

    #[test]
    fn test_distinct_contents_cached_separately() {
        let extractor = ImportExtractor::new(16);
        let a = extractor.extract("import os\n");
        let b = extractor.extract("import sys\n");
        assert_eq!(*a, vec!["import os"]);
        assert_eq!(*b, vec!["import sys"]);
        assert_eq!(extractor.cached_contents(), 2);
    }

    #[test]
    fn test_trait_object() {
        let parser: &dyn ImportParser = &ImportExtractor::default();
        assert_eq!(parser.extract_imports("import os as o\n"), vec!["import os"]);
    }
}
