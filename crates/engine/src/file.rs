//! Persisted-state shape.
//!
//! The engine does not own any file format; persistence layers serialize
//! this flat record however they like. The four lists are sufficient to
//! reconstruct a grid via `Grid::populate`.

use serde::{Deserialize, Serialize};

use crate::cell::{Border, Cell};
use crate::offsets::Heading;

/// Flat serializable snapshot of a grid's state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridFile {
    #[serde(default)]
    pub columns: Vec<Heading>,
    #[serde(default)]
    pub rows: Vec<Heading>,
    #[serde(default)]
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub borders: Vec<Border>,
}
