//! Error types for every pydeps subsystem.
//!
//! One `thiserror` enum per subsystem. Line-level parse problems never surface
//! here: the recognizer treats them as "not an import" and moves on.

mod classify_error;
mod config_error;
mod graph_error;
mod parse_error;
mod render_error;
mod scan_error;

pub use classify_error::ClassifyError;
pub use config_error::ConfigError;
pub use graph_error::GraphError;
pub use parse_error::ParseError;
pub use render_error::RenderError;
pub use scan_error::ScanError;
