//! Row-major reconstruction of sparse table cells.

use crate::azure::result::{AnalyzedTable, TableCell};
use crate::bizfile::text::normalize;
use tracing::warn;

/// Upper bound on the row and column indices a cell may address. Real
/// extracts stay far below this; a corrupt payload must not drive
/// allocation.
const MAX_GRID_INDEX: usize = 1_000;

/// A recognized table rebuilt as ordered rows of normalized cell text.
///
/// Cell coverage in the source payload may be sparse: positions never
/// mentioned read as empty strings, and a row index with no cells at all
/// still materializes as an empty row so row numbering is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Builds a grid from a recognized table.
    pub fn from_table(table: &AnalyzedTable) -> Self {
        Self::from_cells(&table.cells)
    }

    /// Builds a grid by placing each cell's normalized content at
    /// `[row_index][column_index]`, growing rows and columns on demand.
    /// When two cells claim the same position the later one wins. Cells
    /// addressing an index beyond a fixed sanity bound are dropped.
    pub fn from_cells(cells: &[TableCell]) -> Self {
        let mut rows: Vec<Vec<String>> = Vec::new();
        for cell in cells {
            if cell.row_index >= MAX_GRID_INDEX || cell.column_index >= MAX_GRID_INDEX {
                warn!(
                    row = cell.row_index,
                    column = cell.column_index,
                    "cell index out of range, dropping cell"
                );
                continue;
            }
            if rows.len() <= cell.row_index {
                rows.resize_with(cell.row_index + 1, Vec::new);
            }
            let row = &mut rows[cell.row_index];
            if row.len() <= cell.column_index {
                row.resize(cell.column_index + 1, String::new());
            }
            row[cell.column_index] = normalize(&cell.content);
        }
        Self { rows }
    }

    /// Builds a grid from rows whose cells are already normalized.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// All rows in order, header included.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Uppercased space-join of every cell, used to classify the table.
    pub fn signature(&self) -> String {
        let cells: Vec<&str> = self
            .rows
            .iter()
            .flat_map(|row| row.iter().map(String::as_str))
            .collect();
        cells.join(" ").to_uppercase()
    }
}
