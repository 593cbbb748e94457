//! DeleteColumn command

use crate::error::Result;
use crate::op::{Execute, Outcome};
use crate::types::{Board, ColumnId};

/// Delete a column and the cards it holds
///
/// A missing column is a soft failure.
#[derive(Debug, Clone)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    /// Create a new DeleteColumn command
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<Board> for DeleteColumn {
    type Output = Outcome;

    fn execute(&self, board: &mut Board) -> Result<Outcome> {
        match board.columns.iter().position(|c| c.id == self.id) {
            Some(idx) => {
                board.columns.remove(idx);
                Ok(Outcome::Applied)
            }
            None => {
                tracing::debug!(column = %self.id, "delete-column target not found, ignoring");
                Ok(Outcome::Ignored)
            }
        }
    }
}
