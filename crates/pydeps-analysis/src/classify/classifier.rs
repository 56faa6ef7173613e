//! ModuleClassifier: standard vs. custom decision for import roots.

use pydeps_core::config::ClassifyConfig;
use pydeps_core::errors::ClassifyError;
use serde::{Deserialize, Serialize};

use super::cleanup::{module_name_cleanup, remove_keywords, root_cleanup};
use super::signals::{
    AllowList, CachedSignal, DistributionMetadata, ImportableNamespace, StandardLibrarySignal,
};
use crate::parsers::statement::{is_from_form, split_root_and_names};

/// Normalized root of an import statement and its classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassifiedRoot {
    /// Dotted module path, no leading dots, no surrounding whitespace.
    pub root: String,
    pub is_standard: bool,
}

/// Classification capability used by the aggregator.
pub trait ModuleClassify: Send + Sync {
    /// Classify a full import statement.
    fn classify(&self, statement: &str) -> Result<ClassifiedRoot, ClassifyError>;

    /// Classify each root a statement imports.
    ///
    /// `import a, b` yields one entry per listed module, each with its own
    /// verdict. Every other form yields the single result of [`classify`].
    ///
    /// [`classify`]: ModuleClassify::classify
    fn classify_roots(&self, statement: &str) -> Result<Vec<ClassifiedRoot>, ClassifyError> {
        if is_from_form(statement) {
            return Ok(vec![self.classify(statement)?]);
        }
        let (specifier, _) = split_root_and_names(statement);
        if !specifier.contains(',') {
            return Ok(vec![self.classify(statement)?]);
        }
        specifier
            .split(',')
            .map(str::trim)
            .filter(|module| !module.is_empty())
            .map(|module| self.classify(&format!("import {module}")))
            .collect()
    }

    /// Classify raw bytes; non-UTF-8 input is a type mismatch.
    fn classify_bytes(&self, statement: &[u8]) -> Result<ClassifiedRoot, ClassifyError> {
        let text = std::str::from_utf8(statement).map_err(|_| ClassifyError::TypeMismatch {
            found: "bytes".to_string(),
        })?;
        self.classify(text)
    }
}

/// Multi-signal classifier. Signals are ORed; each memoizes its own answers
/// for the lifetime of this instance.
pub struct ModuleClassifier {
    signals: Vec<CachedSignal>,
    cache_capacity: u64,
}

impl ModuleClassifier {
    /// Build the default signal set from configuration: compiled-in modules,
    /// the importable namespace under `search_paths`, distribution metadata,
    /// and any configured extra names.
    pub fn new(config: &ClassifyConfig) -> Self {
        let mut classifier = Self::with_signals(Vec::new(), config.cache_capacity);
        classifier.add_signal(Box::new(AllowList::builtin_modules()));
        classifier.add_signal(Box::new(ImportableNamespace::discover(&config.search_paths)));
        classifier.add_signal(Box::new(DistributionMetadata::new(
            config.search_paths.clone(),
            config.distribution_name.clone(),
        )));
        if !config.extra_standard_modules.is_empty() {
            classifier.add_signal(Box::new(AllowList::new(
                "configured",
                config.extra_standard_modules.iter().cloned(),
            )));
        }
        classifier
    }

    /// Classifier over an explicit signal set.
    pub fn with_signals(signals: Vec<Box<dyn StandardLibrarySignal>>, cache_capacity: u64) -> Self {
        Self {
            signals: signals
                .into_iter()
                .map(|signal| CachedSignal::new(signal, cache_capacity))
                .collect(),
            cache_capacity,
        }
    }

    pub fn add_signal(&mut self, signal: Box<dyn StandardLibrarySignal>) {
        self.signals.push(CachedSignal::new(signal, self.cache_capacity));
    }

    pub fn signal_names(&self) -> Vec<&'static str> {
        self.signals.iter().map(CachedSignal::name).collect()
    }

    /// Whether a bare top-level module name is standard by any signal.
    pub fn is_standard_module(&self, module: &str) -> bool {
        self.signals.iter().any(|signal| signal.is_standard(module))
    }

    /// Classify a root specifier such as `from ..pkg.mod `, `a.b.c` or `os, sys`.
    ///
    /// Relative paths are always custom and a dotted path is decided by its
    /// first segment. A multi-root specifier is standard only when every
    /// listed module is; use [`ModuleClassify::classify_roots`] for
    /// per-module verdicts.
    pub fn classify_specifier(&self, specifier: &str) -> Result<bool, ClassifyError> {
        let bare = remove_keywords(specifier)?;

        if bare.starts_with('.') {
            tracing::trace!(
                specifier,
                module = %module_name_cleanup(&bare),
                "relative import is custom"
            );
            return Ok(false);
        }

        Ok(bare.split(',').all(|listed| {
            match listed.trim().split('.').find(|segment| !segment.is_empty()) {
                Some(top_level) => self.is_standard_module(top_level),
                None => false,
            }
        }))
    }

    /// Drop every memoized answer.
    pub fn clear_caches(&self) {
        for signal in &self.signals {
            signal.clear();
        }
    }
}

impl Default for ModuleClassifier {
    fn default() -> Self {
        Self::new(&ClassifyConfig::default())
    }
}

impl ModuleClassify for ModuleClassifier {
    fn classify(&self, statement: &str) -> Result<ClassifiedRoot, ClassifyError> {
        if statement.trim().is_empty() {
            return Err(ClassifyError::empty_statement());
        }
        let (specifier, _) = split_root_and_names(statement);
        let is_standard = self.classify_specifier(&specifier)?;
        Ok(ClassifiedRoot {
            root: root_cleanup(&specifier),
            is_standard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(statement: &str) -> ClassifiedRoot {
        ModuleClassifier::default().classify(statement).unwrap()
    }

    #[test]
    fn test_find_root() {
        let cases = [
            ("from pathlib import Path", "pathlib", true),
            ("from some.custom.model import dummy", "some.custom.model", false),
            (
                "from ..abstract_models.abstract_graph_model import dummy",
                "abstract_models.abstract_graph_model",
                false,
            ),
            (
                "from .abstract_models.abstract_file_collector_model import dummy",
                "abstract_models.abstract_file_collector_model",
                false,
            ),
            ("import os", "os", true),
            ("import a.b.c", "a.b.c", false),
            ("import collections.abc", "collections.abc", true),
        ];
        for (statement, root, is_standard) in cases {
            let got = classify(statement);
            assert_eq!(got.root, root, "{statement}");
            assert_eq!(got.is_standard, is_standard, "{statement}");
        }
    }

    #[test]
    fn test_relative_import_shadowing_stdlib_is_custom() {
        assert!(!classify("from .os import path").is_standard);
        assert!(!classify("from ..typing.extras import x").is_standard);
        assert!(!classify("from . import json").is_standard);
    }

    #[test]
    fn test_classify_specifier() {
        let classifier = ModuleClassifier::default();
        assert!(!classifier.classify_specifier("import data as ddd").unwrap());
        assert!(classifier.classify_specifier("import ast").unwrap());
        assert!(!classifier.classify_specifier("from pydantic import nothing as nn").unwrap());
        assert!(!classifier.classify_specifier("from ..graph_model import GraphModel").unwrap());
        assert!(!classifier.classify_specifier("from .dependency_model import X").unwrap());
        assert!(classifier.classify_specifier("import typing").unwrap());
        assert!(classifier.classify_specifier("from typing").unwrap());
    }

    #[test]
    fn test_multi_root_statement_needs_every_module_standard() {
        let got = classify("import os, sys");
        assert_eq!(got.root, "os,sys");
        assert!(got.is_standard);
        assert!(!classify("import mylib, os").is_standard);
        assert!(!classify("import os, mylib").is_standard);
    }

    #[test]
    fn test_classify_roots_splits_plain_multi_root() {
        let classifier = ModuleClassifier::default();
        let roots = classifier.classify_roots("import os, mylib.core, sys").unwrap();
        let got: Vec<(&str, bool)> = roots.iter().map(|r| (r.root.as_str(), r.is_standard)).collect();
        assert_eq!(got, [("os", true), ("mylib.core", false), ("sys", true)]);
    }

    #[test]
    fn test_classify_roots_single_forms() {
        let classifier = ModuleClassifier::default();
        let plain = classifier.classify_roots("import collections.abc").unwrap();
        assert_eq!(plain, vec![ClassifiedRoot { root: "collections.abc".to_string(), is_standard: true }]);
        let from = classifier.classify_roots("from os import path, sep").unwrap();
        assert_eq!(from, vec![ClassifiedRoot { root: "os".to_string(), is_standard: true }]);
        assert!(classifier.classify_roots("  ").is_err());
    }

    #[test]
    fn test_empty_statement_rejected() {
        let classifier = ModuleClassifier::default();
        assert_eq!(classifier.classify("").unwrap_err(), ClassifyError::empty_statement());
        assert!(matches!(
            classifier.classify("   "),
            Err(ClassifyError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_non_text_rejected() {
        let classifier = ModuleClassifier::default();
        let err = classifier.classify_bytes(b"import \xff").unwrap_err();
        assert_eq!(err, ClassifyError::TypeMismatch { found: "bytes".to_string() });
        assert_eq!(err.to_string(), "import statement should be str, not bytes");
        assert!(classifier.classify_bytes(b"import os").unwrap().is_standard);
    }

    #[test]
    fn test_search_paths_make_installed_packages_standard() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("pandas")).unwrap();
        std::fs::write(dir.path().join("pandas/__init__.py"), "").unwrap();

        let classifier = ModuleClassifier::new(&ClassifyConfig {
            search_paths: vec![dir.path().to_path_buf()],
            ..ClassifyConfig::default()
        });
        assert!(classifier.classify("import pandas").unwrap().is_standard);
        assert!(classifier.classify("from pandas.core import frame").unwrap().is_standard);
        assert!(!classifier.classify("import custom_library").unwrap().is_standard);
    }

    #[test]
    fn test_configured_extras_and_custom_signals() {
        let classifier = ModuleClassifier::new(&ClassifyConfig {
            extra_standard_modules: vec!["numpy".to_string()],
            ..ClassifyConfig::default()
        });
        assert_eq!(
            classifier.signal_names(),
            vec!["builtin", "importable", "metadata", "configured"]
        );
        assert!(classifier.is_standard_module("numpy"));

        let signals: Vec<Box<dyn StandardLibrarySignal>> =
            vec![Box::new(AllowList::new("pinned", ["os"]))];
        let only_allow_list = ModuleClassifier::with_signals(signals, 8);
        assert!(only_allow_list.is_standard_module("os"));
        assert!(!only_allow_list.is_standard_module("sys"));
    }
}
