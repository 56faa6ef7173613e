//! Heatmap presentation options and output file naming.

use serde::{Deserialize, Serialize};

/// File stem used when no output name is given.
pub const DEFAULT_FILE_STEM: &str = "imports_dependency";

/// Presentation options shared by every renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Figure size in inches, `(width, height)`.
    pub figure_size: (u32, u32),
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Column tick label rotation in degrees.
    pub rotation: i32,
    pub font_size: u32,
    pub color_bar: bool,
}

impl RenderOptions {
    /// Defaults for on-screen display (color bar on).
    pub fn for_display() -> Self {
        Self {
            figure_size: (15, 15),
            title: "Adjacency Matrix".to_string(),
            x_label: "Imports".to_string(),
            y_label: "Paths".to_string(),
            rotation: 90,
            font_size: 8,
            color_bar: true,
        }
    }

    /// Defaults for saved output (color bar off).
    pub fn for_save() -> Self {
        Self {
            color_bar: false,
            ..Self::for_display()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::for_display()
    }
}

/// Output file name: blank falls back to `default_stem`, a name without a
/// `.` gets `default_extension`, spaces become underscores.
pub fn normalize_file_name(name: Option<&str>, default_stem: &str, default_extension: &str) -> String {
    let name = match name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => default_stem,
    };
    let mut file_name = name.to_string();
    if !file_name.contains('.') {
        file_name.push('.');
        file_name.push_str(default_extension.trim_start_matches('.'));
    }
    file_name.replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_defaults() {
        let display = RenderOptions::default();
        assert_eq!(display.figure_size, (15, 15));
        assert_eq!(display.title, "Adjacency Matrix");
        assert_eq!(display.x_label, "Imports");
        assert_eq!(display.y_label, "Paths");
        assert_eq!(display.rotation, 90);
        assert_eq!(display.font_size, 8);
        assert!(display.color_bar);
        assert!(!RenderOptions::for_save().color_bar);
    }

    #[test]
    fn test_normalize_file_name() {
        assert_eq!(normalize_file_name(None, DEFAULT_FILE_STEM, "svg"), "imports_dependency.svg");
        assert_eq!(normalize_file_name(Some("  "), DEFAULT_FILE_STEM, ".svg"), "imports_dependency.svg");
        assert_eq!(normalize_file_name(Some("my graph"), DEFAULT_FILE_STEM, "svg"), "my_graph.svg");
        assert_eq!(normalize_file_name(Some("deps.txt"), DEFAULT_FILE_STEM, "svg"), "deps.txt");
    }
}
