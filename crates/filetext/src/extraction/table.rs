//! Plain-text table rendering.
//!
//! A [`Table`] is a header row plus data rows of equal width. Rendering
//! right-justifies every cell to its column width and separates columns with
//! a fixed gap, without a row-index column:
//!
//! ```text
//!  name  age
//! Alice   30
//!   Bob    4
//! ```
//!
//! A table with columns but no rows renders as a three-line summary instead:
//!
//! ```text
//! Empty DataFrame
//! Columns: [name, age]
//! Index: []
//! ```

use crate::types::TableMetadata;

/// Parsed tabular data. All rows have exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn metadata(&self) -> TableMetadata {
        TableMetadata {
            columns: self.columns.clone(),
            row_count: self.rows.len(),
        }
    }

    /// Render as aligned plain text. No trailing newline.
    pub fn render(&self, column_gap: usize) -> String {
        if self.rows.is_empty() {
            return format!("Empty DataFrame\nColumns: [{}]\nIndex: []", self.columns.join(", "));
        }

        let widths = self.column_widths();
        let gap = " ".repeat(column_gap);

        std::iter::once(&self.columns)
            .chain(self.rows.iter())
            .map(|row| render_row(row, &widths, &gap))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn render_row(row: &[String], widths: &[usize], gap: &str) -> String {
    row.iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(gap)
}
