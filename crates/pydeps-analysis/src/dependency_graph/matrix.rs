//! Path × import adjacency matrix.

use serde::Serialize;

/// Row-major 0/1 matrix with its axis labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix {
    rows: Vec<String>,
    columns: Vec<String>,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Matrix over `rows` × `columns` where a cell is set iff `has_edge` holds.
    pub fn from_fn(rows: Vec<String>, columns: Vec<String>, has_edge: impl Fn(&str, &str) -> bool) -> Self {
        let mut cells = Vec::with_capacity(rows.len() * columns.len());
        for row in &rows {
            for column in &columns {
                cells.push(u8::from(has_edge(row, column)));
            }
        }
        Self { rows, columns, cells }
    }

    /// Path labels, sorted.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Import labels, sorted.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// `(rows, columns)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if row >= self.rows.len() || column >= self.columns.len() {
            return None;
        }
        self.cells.get(row * self.columns.len() + column).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.rows.len() {
            return None;
        }
        let width = self.columns.len();
        Some(&self.cells[row * width..(row + 1) * width])
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows.len()).filter_map(|r| self.row(r).map(<[u8]>::to_vec)).collect()
    }

    /// Number of set cells.
    pub fn set_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
