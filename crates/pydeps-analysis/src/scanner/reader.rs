//! Source file reading.

use std::io::ErrorKind;
use std::path::Path;

use pydeps_core::errors::ScanError;

/// Loads the text of a source file.
pub trait SourceReader: Send + Sync {
    /// Returns the decoded content, or an empty string when the file is missing.
    fn read_source(&self, path: &Path) -> Result<String, ScanError>;
}

/// [`SourceReader`] over the local filesystem. Invalid UTF-8 is replaced
/// rather than rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSourceReader;

impl SourceReader for FsSourceReader {
    fn read_source(&self, path: &Path) -> Result<String, ScanError> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(e) => {
                    tracing::debug!(path = %path.display(), "lossy decode of non-UTF-8 source");
                    String::from_utf8_lossy(e.as_bytes()).into_owned()
                }
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "source file missing, treating as empty");
                Ok(String::new())
            }
            Err(source) => Err(ScanError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
