//! AddCard command

use crate::error::{Result, WorkspaceError};
use crate::op::{Execute, Outcome};
use crate::types::{Board, Card, ColumnId};

/// Add a card to a column
///
/// The card is appended at the end of the column. A missing column is a
/// soft failure; a card id already present anywhere on the board is a
/// `DuplicateId` error.
#[derive(Debug, Clone)]
pub struct AddCard {
    /// The column to add to
    pub column: ColumnId,
    /// The card to add
    pub card: Card,
}

impl AddCard {
    /// Create a new AddCard command
    pub fn new(column: impl Into<ColumnId>, card: Card) -> Self {
        Self {
            column: column.into(),
            card,
        }
    }
}

impl Execute<Board> for AddCard {
    type Output = Outcome;

    fn execute(&self, board: &mut Board) -> Result<Outcome> {
        if board.contains_card(&self.card.id) {
            return Err(WorkspaceError::duplicate_id("card", self.card.id.as_str()));
        }
        match board.find_column_mut(&self.column) {
            Some(column) => {
                column.cards.push(self.card.clone());
                Ok(Outcome::Applied)
            }
            None => {
                tracing::debug!(column = %self.column, "add-card column not found, ignoring");
                Ok(Outcome::Ignored)
            }
        }
    }
}
