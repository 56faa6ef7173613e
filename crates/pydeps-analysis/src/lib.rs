//! # pydeps-analysis
//!
//! Import analysis engine for Python projects.
//! Contains the file scanner, import statement parser, module classifier,
//! project import index, dependency graph, and matrix renderers.

#![allow(clippy::module_inception)]

pub mod classify;
pub mod dependency_graph;
pub mod imports;
pub mod parsers;
pub mod project;
pub mod render;
pub mod scanner;

pub use project::{DependencyProject, ProjectComponents};
