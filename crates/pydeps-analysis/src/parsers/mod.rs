//! Import statement recognition and splitting.

pub mod extractor;
pub mod recognizer;
pub mod statement;
pub mod traits;

pub use extractor::{ImportExtractor, DEFAULT_STATEMENT_CACHE_CAPACITY};
pub use recognizer::{is_import_statement, python_parser};
pub use statement::{extract_imports, split_root_and_names, strip_rename, ImportStatement};
pub use traits::ImportParser;
