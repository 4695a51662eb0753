//! # Document Grid
//!
//! The two-column row structure cells are placed in before rendering.
//!
//! ## Construction
//! ```text
//!   cells:  [c0, c1, c2, c3, c4]
//!
//!   ┌──────────┬──────────┐
//!   │    c0    │    c1    │   row 0
//!   ├──────────┼──────────┤
//!   │    c2    │    c3    │   row 1
//!   ├──────────┼──────────┤
//!   │    c4    │  (empty) │   row 2  ← padded, never dropped
//!   └──────────┴──────────┘
//! ```
//!
//! ## Invariants
//! - every row has exactly [`GRID_COLUMNS`] slots
//! - N cells produce `ceil(N / 2)` rows
//! - only the last slot of the last row can be empty, and it is empty iff N
//!   is odd
//! - cells keep their input order

use crate::GRID_COLUMNS;

/// One grid row. `None` marks an empty slot.
pub type GridRow<T> = [Option<T>; GRID_COLUMNS];

/// Ordered two-column grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentGrid<T> {
    rows: Vec<GridRow<T>>,
}

impl<T> DocumentGrid<T> {
    /// Builds the grid by filling rows left to right, top to bottom.
    pub fn from_cells(cells: impl IntoIterator<Item = T>) -> Self {
        let mut rows = Vec::new();
        let mut cells = cells.into_iter();

        while let Some(left) = cells.next() {
            rows.push([Some(left), cells.next()]);
        }

        DocumentGrid { rows }
    }

    pub fn rows(&self) -> &[GridRow<T>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of filled slots.
    pub fn cell_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Filled cells in order.
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().flat_map(|row| row.iter().flatten())
    }
}

impl<T> Default for DocumentGrid<T> {
    fn default() -> Self {
        DocumentGrid { rows: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_gives_empty_grid() {
        let grid = DocumentGrid::<u32>::from_cells(Vec::new());
        assert!(grid.is_empty());
        assert_eq!(grid.cell_count(), 0);
    }

    #[test]
    fn test_even_count_fills_every_slot() {
        let grid = DocumentGrid::from_cells(["Laptop A", "Unknown device"]);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.rows()[0], [Some("Laptop A"), Some("Unknown device")]);
    }

    #[test]
    fn test_odd_count_pads_last_row() {
        let grid = DocumentGrid::from_cells(1..=3);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.rows()[0], [Some(1), Some(2)]);
        assert_eq!(grid.rows()[1], [Some(3), None]);
    }

    #[test]
    fn test_row_count_and_padding_for_many_sizes() {
        for n in 0..25usize {
            let grid = DocumentGrid::from_cells(0..n);

            assert_eq!(grid.len(), n.div_ceil(2), "rows for n={n}");
            assert_eq!(grid.cell_count(), n);

            for (i, row) in grid.rows().iter().enumerate() {
                assert!(row[0].is_some());
                let is_last = i + 1 == grid.len();
                assert_eq!(row[1].is_none(), is_last && n % 2 == 1, "n={n} row={i}");
            }
        }
    }

    #[test]
    fn test_cells_preserve_order() {
        let grid = DocumentGrid::from_cells(["a", "b", "c", "d", "e"]);
        let order: Vec<_> = grid.cells().copied().collect();
        assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
    }
}
