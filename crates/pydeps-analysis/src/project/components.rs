//! Pluggable pipeline roles.

use pydeps_core::config::PydepsConfig;

use crate::classify::ModuleClassifier;
use crate::dependency_graph::{DependencyGraphBuilder, GraphBuild};
use crate::imports::{ImportAggregation, ImportAggregator};
use crate::parsers::{ImportExtractor, ImportParser};
use crate::render::{MatrixRenderer, SvgRenderer};
use crate::scanner::{FileCollector, FsSourceReader, SourceReader, WalkCollector};

/// One implementation per pipeline role. The project only talks to the traits.
pub struct ProjectComponents {
    pub collector: Box<dyn FileCollector>,
    pub reader: Box<dyn SourceReader>,
    pub parser: Box<dyn ImportParser>,
    pub aggregator: Box<dyn ImportAggregation>,
    pub graph_builder: Box<dyn GraphBuild>,
    pub renderer: Box<dyn MatrixRenderer>,
}

impl ProjectComponents {
    /// Default implementations configured from `config`.
    pub fn from_config(config: &PydepsConfig) -> Self {
        let classifier = ModuleClassifier::new(&config.classify);
        Self {
            collector: Box::new(WalkCollector::new(config.scan.clone())),
            reader: Box::new(FsSourceReader),
            parser: Box::new(ImportExtractor::new(config.scan.statement_cache_capacity)),
            aggregator: Box::new(ImportAggregator::new(Box::new(classifier))),
            graph_builder: Box::new(DependencyGraphBuilder::new()),
            renderer: Box::new(SvgRenderer),
        }
    }

    pub fn with_collector(mut self, collector: Box<dyn FileCollector>) -> Self {
        self.collector = collector;
        self
    }

    pub fn with_reader(mut self, reader: Box<dyn SourceReader>) -> Self {
        self.reader = reader;
        self
    }

    pub fn with_aggregator(mut self, aggregator: Box<dyn ImportAggregation>) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn MatrixRenderer>) -> Self {
        self.renderer = renderer;
        self
    }
}

impl Default for ProjectComponents {
    fn default() -> Self {
        Self::from_config(&PydepsConfig::default())
    }
}
