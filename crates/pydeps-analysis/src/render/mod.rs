//! Adjacency matrix renderers.

pub mod options;
pub mod svg;
pub mod text;
pub mod traits;

pub use options::{normalize_file_name, RenderOptions, DEFAULT_FILE_STEM};
pub use svg::{render_svg, SvgRenderer};
pub use text::{render_text, TextRenderer};
pub use traits::MatrixRenderer;
