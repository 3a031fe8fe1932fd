//! Transactional statement application.
//!
//! A transaction is one user-visible edit: an ordered batch of statements
//! applied strictly sequentially, with the inverse of each collected along
//! the way. The runner mutates the grid in place and is the only component
//! permitted to do so on behalf of the undo system; redraws and saves are
//! the caller's business after the batch completes.

pub mod runners;
pub mod statement;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

pub use runners::{apply, StatementError};
pub use statement::Statement;

/// Forward/reverse statement lists produced by one edit. Immutable once
/// recorded into history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub forward: Vec<Statement>,
    pub reverse: Vec<Statement>,
}

/// A batch that failed part-way through.
///
/// The grid keeps the effects of the statements that already ran; the runner
/// does not roll back. `applied_reverse` carries the inverse statements
/// produced so far so the caller can unwind if it wants all-or-nothing
/// semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFailure {
    pub error: StatementError,
    pub applied_reverse: Vec<Statement>,
}

impl std::fmt::Display for TransactionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "transaction failed after {} statement(s): {}",
            self.applied_reverse.len(),
            self.error
        )
    }
}

impl std::error::Error for TransactionFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Apply a batch of statements in order, collecting the inverse of each.
pub fn run_transaction(
    grid: &mut Grid,
    statements: Vec<Statement>,
) -> Result<Transaction, TransactionFailure> {
    let mut reverse = Vec::with_capacity(statements.len());
    for statement in &statements {
        match apply(grid, statement) {
            Ok(inverse) => reverse.push(inverse),
            Err(error) => {
                return Err(TransactionFailure { error, applied_reverse: reverse });
            }
        }
    }
    Ok(Transaction { forward: statements, reverse })
}
