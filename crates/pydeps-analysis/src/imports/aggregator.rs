//! Statement list → classified per-file record.

use pydeps_core::errors::ClassifyError;
use tracing::trace;

use crate::classify::{ModuleClassifier, ModuleClassify};
use crate::parsers::ImportStatement;

use super::record::FileImportRecord;

/// Builds a [`FileImportRecord`] from the import statements of one file.
pub trait ImportAggregation: Send + Sync {
    fn aggregate(&self, statements: &[String]) -> Result<FileImportRecord, ClassifyError>;
}

/// Default aggregator: split, classify, then register each statement.
pub struct ImportAggregator {
    classifier: Box<dyn ModuleClassify>,
}

impl ImportAggregator {
    pub fn new(classifier: Box<dyn ModuleClassify>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &dyn ModuleClassify {
        self.classifier.as_ref()
    }
}

impl Default for ImportAggregator {
    fn default() -> Self {
        Self::new(Box::new(ModuleClassifier::default()))
    }
}

impl ImportAggregation for ImportAggregator {
    fn aggregate(&self, statements: &[String]) -> Result<FileImportRecord, ClassifyError> {
        let mut record = FileImportRecord::new();
        for statement in statements {
            let parsed = ImportStatement::parse(statement);
            for classified in self.classifier.classify_roots(statement)? {
                trace!(
                    statement = statement.as_str(),
                    root = classified.root.as_str(),
                    standard = classified.is_standard,
                    "classified import"
                );
                record.add(&classified.root, &parsed.imported_names, classified.is_standard);
            }
        }
        Ok(record)
    }
}
