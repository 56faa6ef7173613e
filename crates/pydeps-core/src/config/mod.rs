//! Configuration for scanning, classification, and graph construction.
//!
//! Loaded from `pydeps.toml` at the project root when present.

mod classify_config;
mod graph_config;
mod pydeps_config;
mod scan_config;

pub use classify_config::ClassifyConfig;
pub use graph_config::{GraphConfig, ImportFilter};
pub use pydeps_config::{PydepsConfig, CONFIG_FILE_NAME};
pub use scan_config::ScanConfig;
