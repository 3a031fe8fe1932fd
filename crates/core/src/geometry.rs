use serde::{Deserialize, Serialize};

/// A logical cell coordinate. Unbounded in both directions; negative
/// coordinates lie above/left of the origin.
///
/// Serializes as a two-element array `[x, y]` to match the statement wire
/// shape consumed by external callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

impl Pos {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Pos {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Pos> for (i64, i64) {
    fn from(pos: Pos) -> Self {
        (pos.x, pos.y)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which grid axis a heading or extent refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Column,
    Row,
}

/// Inclusive range along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: i64,
    pub max: i64,
}

/// An inclusive rectangle of cell coordinates.
///
/// INVARIANT: `min.x <= max.x` and `min.y <= max.y`. Constructors normalize;
/// an "empty" region is represented by `Option<Rect>` at the use site, never
/// by a degenerate rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Pos,
    pub max: Pos,
}

impl Rect {
    /// Rectangle spanning two corner coordinates, normalized so that
    /// `min <= max` on both axes.
    pub fn new(a: Pos, b: Pos) -> Self {
        Self {
            min: Pos::new(a.x.min(b.x), a.y.min(b.y)),
            max: Pos::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Rectangle covering a single cell.
    pub fn single(pos: Pos) -> Self {
        Self { min: pos, max: pos }
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x && pos.y >= self.min.y && pos.y <= self.max.y
    }

    /// Number of columns spanned (at least 1).
    pub fn width(&self) -> i64 {
        self.max.x - self.min.x + 1
    }

    /// Number of rows spanned (at least 1).
    pub fn height(&self) -> i64 {
        self.max.y - self.min.y + 1
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min: Pos::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Pos::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Overlap of two rectangles, or `None` if they are disjoint.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let min = Pos::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
        let max = Pos::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
        if min.x > max.x || min.y > max.y {
            return None;
        }
        Some(Rect { min, max })
    }

    /// Grow to include `pos`.
    pub fn extend(&mut self, pos: Pos) {
        self.min.x = self.min.x.min(pos.x);
        self.min.y = self.min.y.min(pos.y);
        self.max.x = self.max.x.max(pos.x);
        self.max.y = self.max.y.max(pos.y);
    }

    /// Iterate every coordinate in the rectangle, row-major.
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        let rect = *self;
        (rect.min.y..=rect.max.y)
            .flat_map(move |y| (rect.min.x..=rect.max.x).map(move |x| Pos::new(x, y)))
    }
}

/// A rectangle in world pixel space (renderer coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_serializes_as_pair() {
        let pos = Pos::new(3, -4);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, "[3,-4]");

        let back: Pos = serde_json::from_str("[3,-4]").unwrap();
        assert_eq!(back, pos);
    }

    #[test]
    fn test_rect_normalizes_corners() {
        let rect = Rect::new(Pos::new(5, -2), Pos::new(-1, 7));
        assert_eq!(rect.min, Pos::new(-1, -2));
        assert_eq!(rect.max, Pos::new(5, 7));
        assert_eq!(rect.width(), 7);
        assert_eq!(rect.height(), 10);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(Pos::new(0, 0), Pos::new(2, 2));
        assert!(rect.contains(Pos::new(0, 0)));
        assert!(rect.contains(Pos::new(2, 2)));
        assert!(!rect.contains(Pos::new(3, 2)));
        assert!(!rect.contains(Pos::new(-1, 0)));
    }

    #[test]
    fn test_rect_intersect_disjoint() {
        let a = Rect::new(Pos::new(0, 0), Pos::new(1, 1));
        let b = Rect::new(Pos::new(5, 5), Pos::new(6, 6));
        assert_eq!(a.intersect(&b), None);
    }

    #[test]
    fn test_rect_intersect_overlap() {
        let a = Rect::new(Pos::new(0, 0), Pos::new(4, 4));
        let b = Rect::new(Pos::new(2, 3), Pos::new(9, 9));
        let clipped = a.intersect(&b).unwrap();
        assert_eq!(clipped, Rect::new(Pos::new(2, 3), Pos::new(4, 4)));
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::single(Pos::new(0, 0));
        let b = Rect::single(Pos::new(-3, 2));
        assert_eq!(a.union(&b), Rect::new(Pos::new(-3, 0), Pos::new(0, 2)));
    }

    #[test]
    fn test_rect_iter_row_major() {
        let rect = Rect::new(Pos::new(0, 0), Pos::new(1, 1));
        let cells: Vec<Pos> = rect.iter().collect();
        assert_eq!(
            cells,
            vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(0, 1), Pos::new(1, 1)]
        );
    }
}
