//! DeleteCard command

use crate::error::Result;
use crate::op::{Execute, Outcome};
use crate::types::{Board, CardId};

/// Delete a card, wherever it lives on the board
///
/// A missing card is a soft failure.
#[derive(Debug, Clone)]
pub struct DeleteCard {
    /// The card id to delete
    pub card: CardId,
}

impl DeleteCard {
    /// Create a new DeleteCard command
    pub fn new(card: impl Into<CardId>) -> Self {
        Self { card: card.into() }
    }
}

impl Execute<Board> for DeleteCard {
    type Output = Outcome;

    fn execute(&self, board: &mut Board) -> Result<Outcome> {
        for column in &mut board.columns {
            if let Some(idx) = column.cards.iter().position(|c| c.id == self.card) {
                column.cards.remove(idx);
                return Ok(Outcome::Applied);
            }
        }
        tracing::debug!(card = %self.card, "delete-card target not found, ignoring");
        Ok(Outcome::Ignored)
    }
}
