use thiserror::Error;

use super::RenderError;

/// Dependency graph errors.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Display or save was requested before any successful build.
    #[error("precondition failed: build_graph() must produce a graph before {operation}")]
    NotBuilt { operation: &'static str },

    #[error(transparent)]
    Render(#[from] RenderError),
}
