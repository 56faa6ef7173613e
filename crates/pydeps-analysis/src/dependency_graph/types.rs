//! Graph value types.

use serde::{Deserialize, Serialize};

/// Marker target for an import of a whole module.
pub const WHOLE_MODULE: &str = "*";

/// One file → imported name edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub source: String,
    pub target: String,
}

impl DependencyEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Summary of a graph build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub input_edges: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub rows: usize,
    pub columns: usize,
}
