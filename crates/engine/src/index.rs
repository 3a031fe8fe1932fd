//! Sparse spatial storage with cached bounding-box metadata.
//!
//! `SparseIndex` backs both cell content and border decorations. The cached
//! bounding box makes point lookups outside the populated region and range
//! queries over empty space cheap no-ops. Deletion cannot cheaply shrink the
//! box, so every removal triggers a full-scan recompute; edits are batched
//! by callers, which keeps that O(n) cost per batch rather than per cell.

use rustc_hash::FxHashMap;

use lattice_core::{MinMax, Pos, Rect};

use crate::cell::{Border, Cell};

/// A record addressable by grid coordinate.
pub trait Spatial {
    fn pos(&self) -> Pos;
}

impl Spatial for Cell {
    fn pos(&self) -> Pos {
        Cell::pos(self)
    }
}

impl Spatial for Border {
    fn pos(&self) -> Pos {
        Border::pos(self)
    }
}

/// Sparse map from coordinate to record with a maintained bounding box.
///
/// INVARIANT: `bounds` is `None` iff the map is empty, otherwise it is the
/// tight rectangle over every stored key. Every mutating method restores
/// this before returning; the empty transition is atomic within one call.
#[derive(Debug, Clone)]
pub struct SparseIndex<T> {
    entries: FxHashMap<Pos, T>,
    bounds: Option<Rect>,
}

impl<T: Spatial> Default for SparseIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Spatial> SparseIndex<T> {
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            bounds: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn empty(&mut self) {
        self.entries.clear();
        self.bounds = None;
    }

    /// Clear and bulk-insert. Load path only; the box is built while
    /// inserting rather than by a separate scan.
    pub fn populate(&mut self, items: Vec<T>) {
        self.empty();
        for item in items {
            let pos = item.pos();
            self.extend_bounds(pos);
            self.entries.insert(pos, item);
        }
    }

    /// Point lookup, short-circuiting when the coordinate lies outside the
    /// cached bounding box.
    pub fn get(&self, pos: Pos) -> Option<&T> {
        let bounds = self.bounds?;
        if !bounds.contains(pos) {
            return None;
        }
        self.entries.get(&pos)
    }

    /// Upsert each item by coordinate, then recompute the bounding box.
    pub fn update(&mut self, items: Vec<T>) {
        for item in items {
            self.entries.insert(item.pos(), item);
        }
        self.recompute_bounds();
    }

    /// Delete each listed coordinate, then recompute the bounding box.
    pub fn clear(&mut self, positions: &[Pos]) {
        for pos in positions {
            self.entries.remove(pos);
        }
        self.recompute_bounds();
    }

    /// All stored items whose coordinates fall within `rect`, iterating the
    /// rectangle clipped against the bounding box rather than scanning the
    /// map. Querying outside the box returns nothing without any map access.
    pub fn query_range(&self, rect: &Rect) -> Vec<&T> {
        let Some(bounds) = self.bounds else {
            return Vec::new();
        };
        let Some(clipped) = rect.intersect(&bounds) else {
            return Vec::new();
        };
        clipped.iter().filter_map(|pos| self.entries.get(&pos)).collect()
    }

    /// Tight bounding box over all stored keys; `None` iff empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// First and last populated x along row `y`, scanning inward from each
    /// edge of the bounding box. `None` if the row holds nothing.
    pub fn row_extent(&self, y: i64) -> Option<MinMax> {
        let bounds = self.bounds?;
        let min = (bounds.min.x..=bounds.max.x).find(|&x| self.get(Pos::new(x, y)).is_some())?;
        let max = (bounds.min.x..=bounds.max.x)
            .rev()
            .find(|&x| self.get(Pos::new(x, y)).is_some())?;
        Some(MinMax { min, max })
    }

    /// First and last populated y along column `x`.
    pub fn column_extent(&self, x: i64) -> Option<MinMax> {
        let bounds = self.bounds?;
        let min = (bounds.min.y..=bounds.max.y).find(|&y| self.get(Pos::new(x, y)).is_some())?;
        let max = (bounds.min.y..=bounds.max.y)
            .rev()
            .find(|&y| self.get(Pos::new(x, y)).is_some())?;
        Some(MinMax { min, max })
    }

    /// Iterate all stored items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    fn extend_bounds(&mut self, pos: Pos) {
        match &mut self.bounds {
            Some(bounds) => bounds.extend(pos),
            None => self.bounds = Some(Rect::single(pos)),
        }
    }

    fn recompute_bounds(&mut self) {
        let mut bounds: Option<Rect> = None;
        for pos in self.entries.keys() {
            match &mut bounds {
                Some(rect) => rect.extend(*pos),
                None => bounds = Some(Rect::single(*pos)),
            }
        }
        self.bounds = bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;
    use proptest::prelude::*;

    fn cell(x: i64, y: i64) -> Cell {
        Cell::text(Pos::new(x, y), format!("{},{}", x, y))
    }

    #[test]
    fn test_empty_index_queries() {
        let index: SparseIndex<Cell> = SparseIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.bounds(), None);
        assert_eq!(index.get(Pos::new(0, 0)), None);
        assert!(index.query_range(&Rect::new(Pos::new(-5, -5), Pos::new(5, 5))).is_empty());
        assert_eq!(index.row_extent(0), None);
        assert_eq!(index.column_extent(0), None);
    }

    #[test]
    fn test_populate_builds_tight_bounds() {
        let mut index = SparseIndex::new();
        index.populate(vec![cell(2, 3), cell(-1, 7), cell(4, -2)]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.bounds(), Some(Rect::new(Pos::new(-1, -2), Pos::new(4, 7))));
    }

    #[test]
    fn test_populate_empty_clears() {
        let mut index = SparseIndex::new();
        index.populate(vec![cell(0, 0)]);
        index.populate(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.bounds(), None);
    }

    #[test]
    fn test_update_upserts_by_coordinate() {
        let mut index = SparseIndex::new();
        index.update(vec![cell(1, 1)]);
        index.update(vec![Cell::number(Pos::new(1, 1), 9.0)]);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.get(Pos::new(1, 1)).map(|c| &c.value),
            Some(&CellValue::Number(9.0))
        );
    }

    #[test]
    fn test_clear_shrinks_bounds() {
        let mut index = SparseIndex::new();
        index.populate(vec![cell(0, 0), cell(10, 10)]);
        index.clear(&[Pos::new(10, 10)]);
        assert_eq!(index.bounds(), Some(Rect::single(Pos::new(0, 0))));
    }

    #[test]
    fn test_clear_to_empty_resets_bounds_atomically() {
        let mut index = SparseIndex::new();
        index.populate(vec![cell(3, 4)]);
        index.clear(&[Pos::new(3, 4)]);
        assert!(index.is_empty());
        assert_eq!(index.bounds(), None);
        assert_eq!(index.get(Pos::new(3, 4)), None);
    }

    #[test]
    fn test_get_outside_bounds_short_circuits() {
        let mut index = SparseIndex::new();
        index.populate(vec![cell(0, 0), cell(10, 10)]);
        assert_eq!(index.get(Pos::new(-100, 0)), None);
        assert_eq!(index.get(Pos::new(5, 5)), None);
        assert!(index.get(Pos::new(10, 10)).is_some());
    }

    #[test]
    fn test_query_range_outside_bounds_is_noop() {
        let mut index = SparseIndex::new();
        index.populate((0..=10).map(|i| cell(i, i)).collect());
        let before = index.len();
        let hits = index.query_range(&Rect::new(Pos::new(-100, -100), Pos::new(-99, -99)));
        assert!(hits.is_empty());
        assert_eq!(index.len(), before);
    }

    #[test]
    fn test_query_range_clips_to_bounds() {
        let mut index = SparseIndex::new();
        index.populate(vec![cell(0, 0), cell(1, 0), cell(5, 5)]);
        let hits = index.query_range(&Rect::new(Pos::new(-1000, -1000), Pos::new(1, 0)));
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_row_and_column_extent() {
        let mut index = SparseIndex::new();
        index.populate(vec![cell(-3, 2), cell(8, 2), cell(1, 2), cell(0, 9)]);
        assert_eq!(index.row_extent(2), Some(MinMax { min: -3, max: 8 }));
        assert_eq!(index.row_extent(3), None);
        assert_eq!(index.column_extent(0), Some(MinMax { min: 9, max: 9 }));
        assert_eq!(index.column_extent(-3), Some(MinMax { min: 2, max: 2 }));
    }

    proptest! {
        #[test]
        fn prop_bounds_always_tight(
            inserts in proptest::collection::vec((-20i64..20, -20i64..20), 0..30),
            removes in proptest::collection::vec((-20i64..20, -20i64..20), 0..30),
        ) {
            let mut index = SparseIndex::new();
            index.update(inserts.iter().map(|&(x, y)| cell(x, y)).collect());
            index.clear(&removes.iter().map(|&(x, y)| Pos::new(x, y)).collect::<Vec<_>>());

            prop_assert_eq!(index.is_empty(), index.len() == 0);
            match index.bounds() {
                None => prop_assert_eq!(index.len(), 0),
                Some(bounds) => {
                    let mut tight: Option<Rect> = None;
                    for item in index.iter() {
                        match &mut tight {
                            Some(rect) => rect.extend(item.pos()),
                            None => tight = Some(Rect::single(item.pos())),
                        }
                    }
                    prop_assert_eq!(Some(bounds), tight);
                }
            }
        }
    }
}
