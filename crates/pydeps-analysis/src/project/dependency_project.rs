//! DependencyProject: collect → read → extract → aggregate → index → graph.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use pydeps_core::config::{ImportFilter, PydepsConfig};
use pydeps_core::errors::{ConfigError, GraphError, ScanError};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::dependency_graph::{flatten, BuiltGraph, DependencyEdge};
use crate::imports::{FileImportRecord, LibraryMatch, ModuleMatch, ProjectImportIndex};
use crate::render::RenderOptions;

use super::components::ProjectComponents;

/// Entries returned by `peek` when no count is given.
pub const DEFAULT_PEEK: usize = 3;

/// Result of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: usize,
    pub statements: usize,
    pub duration: Duration,
}

/// Import analysis of one project directory.
pub struct DependencyProject {
    root: PathBuf,
    config: PydepsConfig,
    components: ProjectComponents,
    index: ProjectImportIndex,
    graph: Option<BuiltGraph>,
}

impl DependencyProject {
    /// Project over `root` with default components.
    pub fn new(root: impl Into<PathBuf>, config: PydepsConfig) -> Self {
        let components = ProjectComponents::from_config(&config);
        Self::with_components(root, config, components)
    }

    pub fn with_components(root: impl Into<PathBuf>, config: PydepsConfig, components: ProjectComponents) -> Self {
        Self {
            root: root.into(),
            config,
            components,
            index: ProjectImportIndex::new(),
            graph: None,
        }
    }

    /// Project over `root`, configured from `pydeps.toml` when present.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        let config = PydepsConfig::load(&root, None)?;
        Ok(Self::new(root, config))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &PydepsConfig {
        &self.config
    }

    /// Collect, read and classify every matching file, then merge the
    /// per-file records into the index in collected path order.
    pub fn scan(&mut self) -> Result<ScanSummary, ScanError> {
        let start = Instant::now();
        let scan = &self.config.scan;
        let paths = self.components.collector.collect_files(
            &self.root,
            &scan.extension,
            scan.effective_exclude_prefix(),
            scan.effective_exclude_suffix(),
        )?;

        let components = &self.components;
        let records: Vec<(String, usize, FileImportRecord)> = paths
            .par_iter()
            .filter(|path| !path.is_empty())
            .map(|path| -> Result<(String, usize, FileImportRecord), ScanError> {
                let source = components.reader.read_source(Path::new(path))?;
                let statements = components.parser.extract_imports(&source);
                let record = components.aggregator.aggregate(&statements)?;
                debug!(path = path.as_str(), statements = statements.len(), "file classified");
                Ok((path.clone(), statements.len(), record))
            })
            .collect::<Result<_, _>>()?;

        let mut statements = 0;
        let files = records.len();
        for (path, count, record) in records {
            statements += count;
            self.index.merge(&path, record);
        }

        let summary = ScanSummary {
            files,
            statements,
            duration: start.elapsed(),
        };
        info!(
            root = %self.root.display(),
            files = summary.files,
            statements = summary.statements,
            elapsed_ms = summary.duration.as_millis() as u64,
            "scan complete"
        );

        if self.config.graph.autobuild {
            self.build_graph(None, None);
        }
        Ok(summary)
    }

    /// Rebuild the graph from the index.
    ///
    /// `strip_prefix` and `filter` fall back to the configured values. When no
    /// edge results the project has no graph.
    pub fn build_graph(&mut self, strip_prefix: Option<&str>, filter: Option<ImportFilter>) -> Option<&BuiltGraph> {
        let graph_config = &self.config.graph;
        let strip_prefix = strip_prefix
            .filter(|p| !p.is_empty())
            .or(graph_config.strip_prefix.as_deref());
        let filter = filter.unwrap_or(graph_config.import_filter);

        let edges = flatten(&self.index, filter, strip_prefix);
        debug!(filter = %filter, edges = edges.len(), "flattened import index");
        self.graph = self.components.graph_builder.build(&edges, graph_config.top_n);
        self.graph.as_ref()
    }

    pub fn graph(&self) -> Option<&BuiltGraph> {
        self.graph.as_ref()
    }

    pub fn is_built(&self) -> bool {
        self.graph.is_some()
    }

    /// Draw the adjacency matrix with the configured renderer.
    pub fn display_graph_matrix(&self, options: &RenderOptions) -> Result<(), GraphError> {
        let graph = self.require_graph("display_graph_matrix")?;
        self.components.renderer.display(graph, options)?;
        Ok(())
    }

    /// Save the adjacency matrix under `dir` and return the written path.
    pub fn save_graph_matrix(
        &self,
        dir: &Path,
        file_name: Option<&str>,
        options: &RenderOptions,
    ) -> Result<PathBuf, GraphError> {
        let graph = self.require_graph("save_graph_matrix")?;
        Ok(self.components.renderer.save(graph, options, dir, file_name)?)
    }

    fn require_graph(&self, operation: &'static str) -> Result<&BuiltGraph, GraphError> {
        self.graph.as_ref().ok_or(GraphError::NotBuilt { operation })
    }

    /// Graph edges, empty before a build.
    pub fn list_edges(&self) -> Vec<DependencyEdge> {
        self.graph.as_ref().map(BuiltGraph::list_edges).unwrap_or_default()
    }

    /// Graph nodes, empty before a build.
    pub fn nodes(&self) -> Vec<&str> {
        self.graph.as_ref().map(BuiltGraph::nodes).unwrap_or_default()
    }

    pub fn index(&self) -> &ProjectImportIndex {
        &self.index
    }

    pub fn peek(&self, n: usize) -> Vec<(&str, &FileImportRecord)> {
        self.index.peek(n)
    }

    pub fn peek_json(&self, n: usize) -> serde_json::Result<String> {
        self.index.peek_json(n)
    }

    pub fn all_paths(&self, sorted: bool) -> Vec<String> {
        self.index.all_paths(sorted)
    }

    pub fn find_imports_by_path(&self, path: &str) -> Option<&FileImportRecord> {
        if path.is_empty() {
            return None;
        }
        self.index.find_by_path(path)
    }

    pub fn find_by_library(&self, library: &str) -> Vec<LibraryMatch> {
        let library = library.trim();
        if library.is_empty() {
            return Vec::new();
        }
        self.index.find_by_library(library)
    }

    pub fn find_by_module(&self, module: &str) -> Vec<ModuleMatch> {
        let module = module.trim();
        if module.is_empty() {
            return Vec::new();
        }
        self.index.find_by_module(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{FileCollector, SourceReader};
    use pydeps_core::types::collections::FxHashMap;

    struct FixedCollector(Vec<String>);

    impl FileCollector for FixedCollector {
        fn collect_files(
            &self,
            _root: &Path,
            _extension: &str,
            _exclude_prefix: Option<&str>,
            _exclude_suffix: Option<&str>,
        ) -> Result<Vec<String>, ScanError> {
            Ok(self.0.clone())
        }
    }

    struct MemoryReader(FxHashMap<String, String>);

    impl SourceReader for MemoryReader {
        fn read_source(&self, path: &Path) -> Result<String, ScanError> {
            Ok(self.0.get(&*path.to_string_lossy()).cloned().unwrap_or_default())
        }
    }

    fn project(config: PydepsConfig) -> DependencyProject {
        let files: FxHashMap<String, String> = [
            ("/repo/a.py", "import os\nfrom pkg.util import helper\n"),
            ("/repo/b.py", "import os\nimport sys\n"),
            ("/repo/empty.py", ""),
        ]
        .into_iter()
        .map(|(p, s)| (p.to_string(), s.to_string()))
        .collect();
        let paths = files.keys().cloned().collect::<std::collections::BTreeSet<_>>().into_iter().collect();
        let components = ProjectComponents::from_config(&config)
            .with_collector(Box::new(FixedCollector(paths)))
            .with_reader(Box::new(MemoryReader(files)));
        DependencyProject::with_components("/repo", config, components)
    }

    #[test]
    fn test_scan_indexes_every_file_in_order() {
        let mut project = project(PydepsConfig::default());
        let summary = project.scan().unwrap();
        assert_eq!(summary.files, 3);
        assert_eq!(summary.statements, 4);
        assert_eq!(project.all_paths(false), ["/repo/a.py", "/repo/b.py", "/repo/empty.py"]);
        assert!(project.find_imports_by_path("/repo/empty.py").unwrap().is_empty());
        assert!(!project.is_built());
    }

    #[test]
    fn test_rescan_concatenates_lists() {
        let mut project = project(PydepsConfig::default());
        project.scan().unwrap();
        project.scan().unwrap();
        let record = project.find_imports_by_path("/repo/a.py").unwrap();
        assert_eq!(record.custom["pkg.util"], ["helper", "helper"]);
        assert!(record.standard["os"].is_empty());
    }

    #[test]
    fn test_build_graph_with_prefix_and_filter() {
        let mut project = project(PydepsConfig::default());
        project.scan().unwrap();

        let graph = project.build_graph(Some("/repo/"), Some(ImportFilter::Standard)).unwrap();
        assert_eq!(graph.matrix().rows(), ["a.py", "b.py"]);
        assert_eq!(graph.matrix().columns(), ["*"]);

        project.build_graph(Some("/repo/"), None);
        let edges = project.list_edges();
        assert_eq!(edges[0], DependencyEdge::new("a.py", "helper"));
        assert!(edges.contains(&DependencyEdge::new("b.py", "*")));
    }

    #[test]
    fn test_autobuild_uses_configured_defaults() {
        let mut config = PydepsConfig::default();
        config.graph.autobuild = true;
        config.graph.strip_prefix = Some("/repo/".to_string());
        config.graph.import_filter = ImportFilter::Custom;
        let mut project = project(config);
        project.scan().unwrap();

        assert_eq!(project.list_edges(), [DependencyEdge::new("a.py", "helper")]);
        assert_eq!(project.nodes(), ["a.py", "helper"]);
    }

    #[test]
    fn test_no_edges_means_not_built() {
        let mut project = project(PydepsConfig::default());
        assert!(project.build_graph(None, None).is_none());
        assert!(project.list_edges().is_empty());

        let dir = tempfile::tempdir().unwrap();
        let err = project
            .save_graph_matrix(dir.path(), None, &RenderOptions::for_save())
            .unwrap_err();
        assert!(matches!(err, GraphError::NotBuilt { operation: "save_graph_matrix" }));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        let err = project.display_graph_matrix(&RenderOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("precondition failed"));
    }

    #[test]
    fn test_save_after_build() {
        let mut project = project(PydepsConfig::default());
        project.scan().unwrap();
        project.build_graph(None, None);

        let dir = tempfile::tempdir().unwrap();
        let path = project
            .save_graph_matrix(dir.path(), Some("deps"), &RenderOptions::for_save())
            .unwrap();
        assert_eq!(path, dir.path().join("deps.svg"));
        assert!(std::fs::read_to_string(path).unwrap().contains("</svg>"));
    }

    #[test]
    fn test_query_delegates_trim_and_skip_blank() {
        let mut project = project(PydepsConfig::default());
        project.scan().unwrap();

        assert_eq!(project.find_by_library(" os ").len(), 2);
        assert!(project.find_by_library("  ").is_empty());
        assert_eq!(project.find_by_module("helper")[0].file, "/repo/a.py");
        assert!(project.find_imports_by_path("").is_none());
        assert_eq!(project.peek(DEFAULT_PEEK).len(), 3);
        assert!(project.peek_json(1).unwrap().contains("\"/repo/a.py\""));
    }
}
