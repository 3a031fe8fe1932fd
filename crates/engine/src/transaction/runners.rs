//! Per-statement runners.
//!
//! Each runner applies one statement tag to the grid and returns the inverse
//! statement. The contract is strict: read the old state at the affected
//! coordinates first, then mutate, then return a statement of the same tag
//! carrying the old state. A runner handed a statement of the wrong tag, or
//! a statement whose payload contradicts its own coordinates, fails — that
//! is a caller/engine mismatch, not a recoverable runtime condition.

use lattice_core::{Axis, Pos};

use crate::grid::Grid;

use super::statement::Statement;

/// Contract violation while applying a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum StatementError {
    /// A runner received a statement of a tag it does not handle.
    MismatchedStatement {
        expected: &'static str,
        found: &'static str,
    },
    /// A record's embedded coordinates disagree with the statement position.
    MisplacedRecord { position: Pos, record: Pos },
    /// A heading size must be strictly positive.
    NonPositiveSize { axis: Axis, index: i64, size: f64 },
}

impl std::fmt::Display for StatementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementError::MismatchedStatement { expected, found } => {
                write!(f, "runner for {} received {} statement", expected, found)
            }
            StatementError::MisplacedRecord { position, record } => {
                write!(f, "record at {} does not match statement position {}", record, position)
            }
            StatementError::NonPositiveSize { axis, index, size } => {
                write!(f, "heading size {} for {:?} {} is not positive", size, axis, index)
            }
        }
    }
}

impl std::error::Error for StatementError {}

/// Apply one statement to the grid, returning the inverse statement.
pub fn apply(grid: &mut Grid, statement: &Statement) -> Result<Statement, StatementError> {
    match statement {
        Statement::SetCell { .. } => run_set_cell(grid, statement),
        Statement::SetBorder { .. } => run_set_border(grid, statement),
        Statement::SetHeading { .. } => run_set_heading(grid, statement),
    }
}

/// Runner for `SET_CELL`: upsert or delete the cell at the statement's
/// position, returning a `SET_CELL` carrying the prior value.
pub fn run_set_cell(grid: &mut Grid, statement: &Statement) -> Result<Statement, StatementError> {
    let Statement::SetCell { position, value } = statement else {
        return Err(StatementError::MismatchedStatement {
            expected: "SET_CELL",
            found: statement.tag(),
        });
    };

    // Old value must be captured before any mutation.
    let old_value = grid.get_cell(*position).cloned();
    match value {
        None => grid.delete_cells(&[*position]),
        Some(cell) => {
            if cell.pos() != *position {
                return Err(StatementError::MisplacedRecord {
                    position: *position,
                    record: cell.pos(),
                });
            }
            grid.update_cells(vec![cell.clone()]);
        }
    }

    Ok(Statement::SetCell { position: *position, value: old_value })
}

/// Runner for `SET_BORDER`: upsert or delete the border decoration at the
/// statement's position, returning a `SET_BORDER` carrying the prior value.
pub fn run_set_border(grid: &mut Grid, statement: &Statement) -> Result<Statement, StatementError> {
    let Statement::SetBorder { position, border } = statement else {
        return Err(StatementError::MismatchedStatement {
            expected: "SET_BORDER",
            found: statement.tag(),
        });
    };

    let old_border = grid.get_border(*position).cloned();
    match border {
        None => grid.clear_borders(&[*position]),
        Some(border) => {
            if border.pos() != *position {
                return Err(StatementError::MisplacedRecord {
                    position: *position,
                    record: border.pos(),
                });
            }
            grid.update_borders(vec![border.clone()]);
        }
    }

    Ok(Statement::SetBorder { position: *position, border: old_border })
}

/// Runner for `SET_HEADING`: set or clear one axis size override, returning
/// a `SET_HEADING` carrying the prior override (which may be `None`).
pub fn run_set_heading(grid: &mut Grid, statement: &Statement) -> Result<Statement, StatementError> {
    let Statement::SetHeading { axis, index, size } = statement else {
        return Err(StatementError::MismatchedStatement {
            expected: "SET_HEADING",
            found: statement.tag(),
        });
    };

    if let Some(size) = *size {
        if size <= 0.0 {
            return Err(StatementError::NonPositiveSize { axis: *axis, index: *index, size });
        }
    }

    let old_size = grid.offsets.axis(*axis).heading_size(*index);
    grid.offsets.axis_mut(*axis).set_heading(*index, *size);

    Ok(Statement::SetHeading { axis: *axis, index: *index, size: old_size })
}
