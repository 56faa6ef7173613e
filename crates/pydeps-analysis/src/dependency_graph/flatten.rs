//! Import index → edge list.

use pydeps_core::config::ImportFilter;

use crate::imports::{ImportKind, ProjectImportIndex};

use super::types::{DependencyEdge, WHOLE_MODULE};

/// Flatten the index into `(path, imported name)` edges.
///
/// The first occurrence of `strip_prefix` is removed from each path. A root
/// with no names yields a single edge to [`WHOLE_MODULE`]. `All` emits every
/// custom edge before every standard edge.
pub fn flatten(index: &ProjectImportIndex, filter: ImportFilter, strip_prefix: Option<&str>) -> Vec<DependencyEdge> {
    match filter {
        ImportFilter::Standard => flatten_kind(index, ImportKind::Standard, strip_prefix),
        ImportFilter::Custom => flatten_kind(index, ImportKind::Custom, strip_prefix),
        ImportFilter::All => {
            let mut edges = flatten_kind(index, ImportKind::Custom, strip_prefix);
            edges.extend(flatten_kind(index, ImportKind::Standard, strip_prefix));
            edges
        }
    }
}

fn flatten_kind(index: &ProjectImportIndex, kind: ImportKind, strip_prefix: Option<&str>) -> Vec<DependencyEdge> {
    let mut edges = Vec::new();
    for (path, record) in index.iter() {
        let source = strip_path(path, strip_prefix);
        for names in record.bucket(kind).values() {
            if names.is_empty() {
                edges.push(DependencyEdge::new(source.clone(), WHOLE_MODULE));
            } else {
                edges.extend(names.iter().map(|name| DependencyEdge::new(source.clone(), name.clone())));
            }
        }
    }
    edges
}

fn strip_path(path: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => path.replacen(prefix, "", 1),
        _ => path.to_string(),
    }
}
