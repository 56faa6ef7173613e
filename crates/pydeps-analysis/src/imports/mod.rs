//! Per-file import records, aggregation, and the project-wide index.

pub mod aggregator;
pub mod index;
pub mod record;

pub use aggregator::{ImportAggregation, ImportAggregator};
pub use index::{LibraryMatch, ModuleMatch, ProjectImportIndex};
pub use record::{FileImportRecord, ImportBucket, ImportKind};

use serde::Serialize;

/// Pretty JSON with an `indent`-wide space indentation.
pub(crate) fn to_json_indented<T: Serialize + ?Sized>(value: &T, indent: usize) -> serde_json::Result<String> {
    let indent = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
