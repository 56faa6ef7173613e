use std::path::PathBuf;

use thiserror::Error;

use super::ClassifyError;

/// Errors raised while collecting, reading, or indexing source files.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("file name {} is not valid text ({found})", path.display())]
    TypeMismatch { path: PathBuf, found: String },

    #[error("scan root does not exist: {}", path.display())]
    RootNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}
