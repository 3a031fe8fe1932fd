//! The grid state container.
//!
//! `Grid` composes the per-axis offsets with the two sparse indices (cell
//! content and border decorations) behind coordinate-based accessors. It
//! holds no undo logic; on behalf of the undo system it is mutated only by
//! the transaction runners.

use lattice_core::{MinMax, Pos, Rect};

use crate::cell::{Border, Cell};
use crate::file::GridFile;
use crate::index::SparseIndex;
use crate::offsets::GridOffsets;

#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub offsets: GridOffsets,
    cells: SparseIndex<Cell>,
    borders: SparseIndex<Border>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Cells
    // =========================================================================

    pub fn get_cell(&self, pos: Pos) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn update_cells(&mut self, cells: Vec<Cell>) {
        self.cells.update(cells);
    }

    pub fn delete_cells(&mut self, positions: &[Pos]) {
        self.cells.clear(positions);
    }

    pub fn cells_in_range(&self, rect: &Rect) -> Vec<&Cell> {
        self.cells.query_range(rect)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// First and last populated column in a row; used by callers for
    /// end-of-content navigation.
    pub fn row_extent(&self, y: i64) -> Option<MinMax> {
        self.cells.row_extent(y)
    }

    /// First and last populated row in a column.
    pub fn column_extent(&self, x: i64) -> Option<MinMax> {
        self.cells.column_extent(x)
    }

    // =========================================================================
    // Borders
    // =========================================================================

    pub fn get_border(&self, pos: Pos) -> Option<&Border> {
        self.borders.get(pos)
    }

    pub fn update_borders(&mut self, borders: Vec<Border>) {
        self.borders.update(borders);
    }

    pub fn clear_borders(&mut self, positions: &[Pos]) {
        self.borders.clear(positions);
    }

    pub fn borders_in_range(&self, rect: &Rect) -> Vec<&Border> {
        self.borders.query_range(rect)
    }

    // =========================================================================
    // Whole-grid queries and persistence
    // =========================================================================

    /// Tight box over everything stored in the grid: the union of the cell
    /// and border bounding boxes. `None` when the grid is empty.
    pub fn grid_bounds(&self) -> Option<Rect> {
        match (self.cells.bounds(), self.borders.bounds()) {
            (Some(cells), Some(borders)) => Some(cells.union(&borders)),
            (Some(cells), None) => Some(cells),
            (None, Some(borders)) => Some(borders),
            (None, None) => None,
        }
    }

    /// Rebuild the grid wholesale from a persisted snapshot.
    pub fn populate(&mut self, file: GridFile) {
        self.offsets.populate(file.columns, file.rows);
        self.cells.populate(file.cells);
        self.borders.populate(file.borders);
    }

    /// Snapshot the grid into the persisted-state shape. Lists are sorted
    /// by coordinate so exports are deterministic.
    pub fn export(&self) -> GridFile {
        let mut cells: Vec<Cell> = self.cells.iter().cloned().collect();
        cells.sort_by_key(|c| (c.y, c.x));
        let mut borders: Vec<Border> = self.borders.iter().cloned().collect();
        borders.sort_by_key(|b| (b.y, b.x));
        GridFile {
            columns: self.offsets.columns.headings(),
            rows: self.offsets.rows.headings(),
            cells,
            borders,
        }
    }
}
