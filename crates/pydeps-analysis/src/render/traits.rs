//! Renderer seam used by the orchestrator.

use std::io::Write;
use std::path::{Path, PathBuf};

use pydeps_core::errors::RenderError;
use tracing::info;

use crate::dependency_graph::BuiltGraph;

use super::options::{normalize_file_name, RenderOptions, DEFAULT_FILE_STEM};

/// Draws a graph's adjacency matrix.
pub trait MatrixRenderer: Send + Sync {
    /// Extension appended to output names that carry none.
    fn default_extension(&self) -> &'static str;

    /// Full rendered document.
    fn render(&self, graph: &BuiltGraph, options: &RenderOptions) -> Result<String, RenderError>;

    /// Write the rendering to stdout.
    fn display(&self, graph: &BuiltGraph, options: &RenderOptions) -> Result<(), RenderError> {
        let rendered = self.render(graph, options)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Write the rendering to `dir/<normalized file_name>` and return the path.
    fn save(
        &self,
        graph: &BuiltGraph,
        options: &RenderOptions,
        dir: &Path,
        file_name: Option<&str>,
    ) -> Result<PathBuf, RenderError> {
        let rendered = self.render(graph, options)?;
        let path = dir.join(normalize_file_name(file_name, DEFAULT_FILE_STEM, self.default_extension()));
        std::fs::write(&path, rendered).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "adjacency matrix saved");
        Ok(path)
    }
}
