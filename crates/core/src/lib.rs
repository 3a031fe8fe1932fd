//! Core geometry types shared by the engine and its callers.
//!
//! Everything here is plain value data: integer cell coordinates, inclusive
//! cell rectangles, and the pixel-space rectangles the renderer trades in.
//! No engine logic lives in this crate.

pub mod geometry;

pub use geometry::{Axis, MinMax, Pos, Rect, ScreenRect};
