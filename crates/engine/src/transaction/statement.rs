//! Statement types — the reversible mutation records.
//!
//! Wire shape is the tagged form `{ "type": ..., "data": ... }` so external
//! callers (UI, sync, persistence) can construct and log statements without
//! knowing engine internals. Every statement applied to a grid yields an
//! inverse statement of the same tag that restores the prior state.

use serde::{Deserialize, Serialize};

use lattice_core::{Axis, Pos};

use crate::cell::{Border, Cell};

/// One atomic grid mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Statement {
    /// Set or delete the cell at `position`. `None` deletes.
    SetCell {
        position: Pos,
        value: Option<Cell>,
    },
    /// Set or delete the border decoration at `position`. `None` deletes.
    SetBorder {
        position: Pos,
        border: Option<Border>,
    },
    /// Set or clear the size override for one row or column. `None` reverts
    /// the index to the axis default.
    SetHeading {
        axis: Axis,
        index: i64,
        size: Option<f64>,
    },
}

impl Statement {
    /// The statement's wire tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Statement::SetCell { .. } => "SET_CELL",
            Statement::SetBorder { .. } => "SET_BORDER",
            Statement::SetHeading { .. } => "SET_HEADING",
        }
    }
}
