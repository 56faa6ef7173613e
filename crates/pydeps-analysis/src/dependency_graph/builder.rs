//! DependencyGraphBuilder: edge list → petgraph DiGraph + adjacency matrix.

use std::collections::BTreeSet;

use petgraph::graph::{DiGraph, NodeIndex};
use pydeps_core::types::collections::FxHashMap;
use tracing::{debug, info};

use super::matrix::AdjacencyMatrix;
use super::types::{DependencyEdge, GraphStats};

/// A built path → import graph.
#[derive(Debug, Clone)]
pub struct BuiltGraph {
    graph: DiGraph<String, ()>,
    node_index: FxHashMap<String, NodeIndex>,
    matrix: AdjacencyMatrix,
    stats: GraphStats,
}

impl BuiltGraph {
    /// Node labels in first-seen order.
    pub fn nodes(&self) -> Vec<&str> {
        self.graph.node_weights().map(String::as_str).collect()
    }

    /// Distinct edges in first-seen order.
    pub fn edges(&self) -> Vec<DependencyEdge> {
        self.graph
            .edge_indices()
            .filter_map(|idx| self.graph.edge_endpoints(idx))
            .map(|(source, target)| DependencyEdge::new(self.graph[source].clone(), self.graph[target].clone()))
            .collect()
    }

    /// Edge table with `source` / `target` columns.
    pub fn list_edges(&self) -> Vec<DependencyEdge> {
        self.edges()
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.node_index.get(source), self.node_index.get(target)) {
            (Some(&s), Some(&t)) => self.graph.contains_edge(s, t),
            _ => false,
        }
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    pub fn stats(&self) -> &GraphStats {
        &self.stats
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Underlying petgraph graph.
    pub fn graph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }
}

/// Graph construction seam used by the orchestrator.
pub trait GraphBuild: Send + Sync {
    /// `None` when there are no edges.
    fn build(&self, edges: &[DependencyEdge], top_n: usize) -> Option<BuiltGraph>;
}

/// Default builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyGraphBuilder;

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl GraphBuild for DependencyGraphBuilder {
    fn build(&self, edges: &[DependencyEdge], top_n: usize) -> Option<BuiltGraph> {
        if edges.is_empty() {
            debug!("no edges, graph not built");
            return None;
        }

        let mut graph: DiGraph<String, ()> = DiGraph::new();
        let mut node_index: FxHashMap<String, NodeIndex> = FxHashMap::default();
        let mut intern = |graph: &mut DiGraph<String, ()>, label: &str| -> NodeIndex {
            if let Some(&idx) = node_index.get(label) {
                return idx;
            }
            let idx = graph.add_node(label.to_string());
            node_index.insert(label.to_string(), idx);
            idx
        };

        for edge in edges {
            let source = intern(&mut graph, &edge.source);
            let target = intern(&mut graph, &edge.target);
            graph.update_edge(source, target, ());
        }

        let mut rows = sorted_labels(edges.iter().map(|e| e.source.as_str()));
        let mut columns = sorted_labels(edges.iter().map(|e| e.target.as_str()));
        if top_n > 0 {
            rows.truncate(top_n);
            columns.truncate(top_n);
        }

        let matrix = AdjacencyMatrix::from_fn(rows, columns, |source, target| {
            match (node_index.get(source), node_index.get(target)) {
                (Some(&s), Some(&t)) => graph.contains_edge(s, t),
                _ => false,
            }
        });

        let (row_count, column_count) = matrix.dims();
        let stats = GraphStats {
            input_edges: edges.len(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            rows: row_count,
            columns: column_count,
        };
        info!(
            nodes = stats.node_count,
            edges = stats.edge_count,
            rows = stats.rows,
            columns = stats.columns,
            "dependency graph built"
        );

        Some(BuiltGraph {
            graph,
            node_index,
            matrix,
            stats,
        })
    }
}

fn sorted_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    labels
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
