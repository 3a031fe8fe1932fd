//! Mapping between logical row/column indices and variable pixel extents.
//!
//! The grid is unbounded in both directions, so placements cannot be
//! precomputed into an array; they are derived on demand by a cumulative
//! walk outward from index 0 over a sparse override table. This is
//! O(distance from origin) per query, which is fine because callers only
//! query within a visible viewport window.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use lattice_core::{Axis, Pos, Rect, ScreenRect};

/// Default column width in pixels when no heading override exists.
pub const CELL_WIDTH: f64 = 100.0;
/// Default row height in pixels when no heading override exists.
pub const CELL_HEIGHT: f64 = 20.0;

/// An explicit size override for one row or column.
///
/// Absence of a heading for an index means "use the axis default". Headings
/// are created only by resize statements, never implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub id: i64,
    pub size: f64,
}

/// Pixel-space start and extent of one logical index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub start: f64,
    pub size: f64,
}

/// Result of locating the index containing a pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexAt {
    pub index: i64,
    pub start: f64,
}

/// One axis worth of size overrides plus the axis default.
///
/// INVARIANT: no stored heading has a non-positive size. This is what
/// guarantees `index_at` makes progress on every step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisOffsets {
    headings: FxHashMap<i64, Heading>,
    default_size: f64,
}

impl AxisOffsets {
    pub fn new(default_size: f64) -> Self {
        Self {
            headings: FxHashMap::default(),
            default_size,
        }
    }

    /// Extent of the given index: the override if present, else the default.
    pub fn size(&self, index: i64) -> f64 {
        self.headings.get(&index).map(|h| h.size).unwrap_or(self.default_size)
    }

    /// The raw override for an index, if one exists.
    pub fn heading_size(&self, index: i64) -> Option<f64> {
        self.headings.get(&index).map(|h| h.size)
    }

    /// Set or clear the override for an index. `None` reverts the index to
    /// the axis default. Callers validate that sizes are strictly positive
    /// before reaching this point.
    pub fn set_heading(&mut self, index: i64, size: Option<f64>) {
        match size {
            Some(size) => {
                debug_assert!(size > 0.0);
                self.headings.insert(index, Heading { id: index, size });
            }
            None => {
                self.headings.remove(&index);
            }
        }
    }

    /// Wholesale replace the override table. Load path only.
    pub fn populate(&mut self, headings: Vec<Heading>) {
        self.headings.clear();
        for heading in headings {
            self.headings.insert(heading.id, heading);
        }
    }

    /// All overrides, sorted by index for deterministic export.
    pub fn headings(&self) -> Vec<Heading> {
        let mut headings: Vec<Heading> = self.headings.values().copied().collect();
        headings.sort_by_key(|h| h.id);
        headings
    }

    /// Pixel placement of a logical index.
    ///
    /// For non-negative indices the start is the cumulative sum of sizes of
    /// indices `0..index`; for negative indices it is the negative cumulative
    /// sum of `index..0`. Index 0 is anchored at pixel 0 regardless of how
    /// far the grid extends in either direction.
    pub fn placement(&self, index: i64) -> Placement {
        let mut start = 0.0;
        if index >= 0 {
            for i in 0..index {
                start += self.size(i);
            }
        } else {
            // Accumulate outward from -1 so the partial sums match the walk
            // in `index_at` bit-for-bit.
            for i in (index..0).rev() {
                start -= self.size(i);
            }
        }
        Placement { start, size: self.size(index) }
    }

    /// Inverse of `placement`: the index whose extent contains `position`,
    /// walking cumulatively outward from index 0 in the direction of the
    /// position's sign. Terminates for any finite position because every
    /// size is strictly positive.
    pub fn index_at(&self, position: f64) -> IndexAt {
        if position >= 0.0 {
            let mut index = 0;
            let mut start = 0.0;
            let mut next = self.size(0);
            while start + next <= position {
                start += next;
                index += 1;
                next = self.size(index);
            }
            IndexAt { index, start }
        } else {
            let mut index = 0;
            let mut start = 0.0;
            while start > position {
                index -= 1;
                start -= self.size(index);
            }
            IndexAt { index, start }
        }
    }
}

/// The column/row offset pair owned by a grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridOffsets {
    pub columns: AxisOffsets,
    pub rows: AxisOffsets,
}

impl Default for GridOffsets {
    fn default() -> Self {
        Self::new()
    }
}

impl GridOffsets {
    pub fn new() -> Self {
        Self {
            columns: AxisOffsets::new(CELL_WIDTH),
            rows: AxisOffsets::new(CELL_HEIGHT),
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisOffsets {
        match axis {
            Axis::Column => &self.columns,
            Axis::Row => &self.rows,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisOffsets {
        match axis {
            Axis::Column => &mut self.columns,
            Axis::Row => &mut self.rows,
        }
    }

    /// Wholesale replace both override tables. Load path only.
    pub fn populate(&mut self, columns: Vec<Heading>, rows: Vec<Heading>) {
        self.columns.populate(columns);
        self.rows.populate(rows);
    }

    /// World-pixel rectangle covering one cell.
    pub fn cell_rect(&self, pos: Pos) -> ScreenRect {
        let column = self.columns.placement(pos.x);
        let row = self.rows.placement(pos.y);
        ScreenRect::new(column.start, row.start, column.size, row.size)
    }

    /// The cell containing a world-pixel point.
    pub fn cell_at(&self, x: f64, y: f64) -> Pos {
        Pos::new(self.columns.index_at(x).index, self.rows.index_at(y).index)
    }

    /// Inclusive cell-index rectangle covered by a world-pixel rectangle.
    pub fn screen_to_range(&self, screen: &ScreenRect) -> Rect {
        let min = self.cell_at(screen.x, screen.y);
        let max = self.cell_at(screen.right(), screen.bottom());
        Rect::new(min, max)
    }
}
