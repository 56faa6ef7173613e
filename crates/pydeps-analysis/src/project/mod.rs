//! Orchestration of the full pipeline.

pub mod components;
pub mod dependency_project;

pub use components::ProjectComponents;
pub use dependency_project::{DependencyProject, ScanSummary, DEFAULT_PEEK};
