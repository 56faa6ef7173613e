//! Terminal grid rendering.

use pydeps_core::errors::RenderError;

use crate::dependency_graph::{AdjacencyMatrix, BuiltGraph};

use super::options::RenderOptions;
use super::traits::MatrixRenderer;

/// Plain-text grid: one row per path, one column per import, `1`/`0` cells.
/// Column labels are stacked vertically when the tick rotation is non-zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl MatrixRenderer for TextRenderer {
    fn default_extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, graph: &BuiltGraph, options: &RenderOptions) -> Result<String, RenderError> {
        Ok(render_text(graph.matrix(), options))
    }
}

pub fn render_text(matrix: &AdjacencyMatrix, options: &RenderOptions) -> String {
    let label_width = matrix
        .rows()
        .iter()
        .map(|r| r.chars().count())
        .chain(std::iter::once(options.y_label.chars().count()))
        .max()
        .unwrap_or(0);
    let vertical = options.rotation != 0;
    let cell_width = if vertical {
        2
    } else {
        matrix.columns().iter().map(|c| c.chars().count()).max().unwrap_or(1) + 1
    };

    let mut out = String::new();
    out.push_str(&options.title);
    out.push('\n');
    out.push_str(&format!("{:>label_width$} | {}\n", options.y_label, options.x_label));

    if vertical {
        let depth = matrix.columns().iter().map(|c| c.chars().count()).max().unwrap_or(0);
        let columns: Vec<Vec<char>> = matrix.columns().iter().map(|c| c.chars().collect()).collect();
        for k in 0..depth {
            out.push_str(&format!("{:label_width$} |", ""));
            for column in &columns {
                let ch = column.get(k).copied().unwrap_or(' ');
                out.push_str(&format!("{ch:>cell_width$}"));
            }
            out.push('\n');
        }
    } else {
        out.push_str(&format!("{:label_width$} |", ""));
        for column in matrix.columns() {
            out.push_str(&format!("{column:>cell_width$}"));
        }
        out.push('\n');
    }

    out.push_str(&"-".repeat(label_width + 2 + cell_width * matrix.columns().len()));
    out.push('\n');

    for (i, row) in matrix.rows().iter().enumerate() {
        out.push_str(&format!("{row:>label_width$} |"));
        for cell in matrix.row(i).unwrap_or_default() {
            out.push_str(&format!("{cell:>cell_width$}"));
        }
        out.push('\n');
    }

    if options.color_bar {
        out.push_str("legend: 1 = imports, 0 = no import\n");
    }
    out
}
