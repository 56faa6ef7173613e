//! File collection and source reading.
//!
//! These are the pipeline's collaborators at the filesystem boundary: a
//! collector that lists candidate files and a reader that loads their text.

pub mod filter;
pub mod hasher;
pub mod reader;
pub mod walker;

pub use filter::{filter_files, keep_file_by_extension, keep_file_by_name, to_posix};
pub use hasher::hash_content;
pub use reader::{FsSourceReader, SourceReader};
pub use walker::{FileCollector, WalkCollector, DEFAULT_IGNORES};
