//! Path → import dependency graph and its adjacency matrix.

pub mod builder;
pub mod flatten;
pub mod matrix;
pub mod types;

pub use builder::{BuiltGraph, DependencyGraphBuilder, GraphBuild};
pub use flatten::flatten;
pub use matrix::AdjacencyMatrix;
pub use types::{DependencyEdge, GraphStats, WHOLE_MODULE};

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use pydeps_core::config::ImportFilter;

    use super::*;
    use crate::imports::{FileImportRecord, ProjectImportIndex};

    fn ident() -> impl Strategy<Value = String> {
        "[a-z]{1,4}"
    }

    fn bucket() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
        prop::collection::vec((ident(), prop::collection::vec(ident(), 0..3)), 0..4)
    }

    fn record() -> impl Strategy<Value = FileImportRecord> {
        (bucket(), bucket()).prop_map(|(standard, custom)| {
            let mut record = FileImportRecord::new();
            for (root, names) in standard {
                record.add(&root, &names, true);
            }
            for (root, names) in custom {
                record.add(&root, &names, false);
            }
            record
        })
    }

    fn index() -> impl Strategy<Value = ProjectImportIndex> {
        prop::collection::vec((ident(), record()), 0..5).prop_map(|files| {
            let mut index = ProjectImportIndex::new();
            for (name, record) in files {
                index.merge(&format!("{name}.py"), record);
            }
            index
        })
    }

    fn edge_list() -> impl Strategy<Value = Vec<DependencyEdge>> {
        prop::collection::vec((ident(), ident()), 1..20).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(s, t)| DependencyEdge::new(format!("{s}.py"), t))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn flatten_all_is_custom_plus_standard(index in index()) {
            let mut combined = flatten(&index, ImportFilter::Custom, None);
            combined.extend(flatten(&index, ImportFilter::Standard, None));
            let mut all = flatten(&index, ImportFilter::All, None);
            combined.sort();
            all.sort();
            prop_assert_eq!(combined, all);
        }

        #[test]
        fn matrix_cells_match_edges(edges in edge_list(), top_n in 0usize..4) {
            let built = DependencyGraphBuilder.build(&edges, top_n).unwrap();
            let matrix = built.matrix();
            let (rows, columns) = matrix.dims();
            if top_n > 0 {
                prop_assert!(rows <= top_n && columns <= top_n);
            }
            for (i, row) in matrix.rows().iter().enumerate() {
                for (j, column) in matrix.columns().iter().enumerate() {
                    let expected = edges.iter().any(|e| &e.source == row && &e.target == column);
                    prop_assert_eq!(matrix.get(i, j), Some(u8::from(expected)));
                }
            }
            prop_assert!(columns > 0 && rows > 0);
        }
    }
}
