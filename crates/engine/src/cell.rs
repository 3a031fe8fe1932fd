//! Cell and border records stored in the sparse indices.

use serde::{Deserialize, Serialize};

use lattice_core::Pos;

/// Value held by a cell. Formula evaluation is out of scope for the engine
/// core; formula text arrives here as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    /// Classify raw user input the way the grid editor hands it over.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(num) = trimmed.parse::<f64>() {
            return CellValue::Number(num);
        }
        CellValue::Text(trimmed.to_string())
    }

    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
        }
    }
}

/// One populated grid cell. At most one cell exists per coordinate; an
/// absent entry means the cell is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
    pub value: CellValue,
}

impl Cell {
    pub fn new(pos: Pos, value: CellValue) -> Self {
        Self { x: pos.x, y: pos.y, value }
    }

    pub fn text(pos: Pos, text: impl Into<String>) -> Self {
        Self::new(pos, CellValue::Text(text.into()))
    }

    pub fn number(pos: Pos, number: f64) -> Self {
        Self::new(pos, CellValue::Number(number))
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }
}

/// Line style for a border edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    Line1,
    Line2,
    Line3,
    Dotted,
    Dashed,
    Double,
}

/// Styling for one border edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderLine {
    /// CSS-style color string; `None` inherits the theme default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub style: BorderStyle,
}

/// Border decoration at one cell. `horizontal` is the line along the cell's
/// top edge, `vertical` the line along its left edge; neighboring cells
/// contribute the other two edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub x: i64,
    pub y: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<BorderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<BorderLine>,
}

impl Border {
    pub fn new(pos: Pos) -> Self {
        Self { x: pos.x, y: pos.y, horizontal: None, vertical: None }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }
}
