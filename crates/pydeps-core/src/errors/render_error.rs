use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while drawing or persisting an adjacency matrix.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write matrix to output: {0}")]
    Output(#[from] std::io::Error),

    #[error("svg encoding failed: {message}")]
    Encoding { message: String },
}
