//! Undo/redo history of recorded transactions.

use crate::grid::Grid;
use crate::transaction::{apply, StatementError, Transaction};

/// Bounded two-stack transaction history.
///
/// INVARIANT: recording a new transaction clears the redo stack — once an
/// edit diverges from an undone branch there is nothing to redo.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<Transaction>,
    redo_stack: Vec<Transaction>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_limit(100)
    }

    /// History bounded to `max_entries` transactions, evicting oldest-first
    /// on overflow.
    pub fn with_limit(max_entries: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_entries,
        }
    }

    /// Record a completed transaction as one undoable step.
    pub fn record(&mut self, transaction: Transaction) {
        if transaction.forward.is_empty() {
            return;
        }
        self.undo_stack.push(transaction);
        self.redo_stack.clear();

        if self.undo_stack.len() > self.max_entries {
            self.undo_stack.remove(0);
        }
    }

    /// Undo the most recent transaction by replaying its reverse statements
    /// last-applied-first, so dependent edits unwind correctly. Returns
    /// `Ok(false)` when there is nothing to undo.
    pub fn undo(&mut self, grid: &mut Grid) -> Result<bool, StatementError> {
        let Some(transaction) = self.undo_stack.pop() else {
            return Ok(false);
        };
        for statement in transaction.reverse.iter().rev() {
            apply(grid, statement)?;
        }
        self.redo_stack.push(transaction);
        Ok(true)
    }

    /// Redo the most recently undone transaction by replaying its forward
    /// statements in original order. Returns `Ok(false)` when there is
    /// nothing to redo.
    pub fn redo(&mut self, grid: &mut Grid) -> Result<bool, StatementError> {
        let Some(transaction) = self.redo_stack.pop() else {
            return Ok(false);
        };
        for statement in &transaction.forward {
            apply(grid, statement)?;
        }
        self.undo_stack.push(transaction);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
