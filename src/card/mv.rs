//! MoveCard command

use crate::error::Result;
use crate::op::{Execute, Outcome};
use crate::types::{Board, CardId, ColumnId};

/// How a drag between columns is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Remove from the source column, append to the target column
    Move,
    /// Append a clone with a derived id to the target column, leaving the
    /// source card untouched (same id, same position)
    Duplicate,
}

/// Move or duplicate a card between columns
///
/// The card is located in the source column by id and lands at the end of
/// the target column. Missing columns or a card absent from the source
/// column are soft failures.
#[derive(Debug, Clone)]
pub struct MoveCard {
    /// Column the card currently lives in
    pub source: ColumnId,
    /// Column the card is dropped on
    pub target: ColumnId,
    /// The card id
    pub card: CardId,
    /// Move or duplicate
    pub mode: MoveMode,
}

impl MoveCard {
    /// Create a MoveCard command in move mode
    pub fn new(
        source: impl Into<ColumnId>,
        target: impl Into<ColumnId>,
        card: impl Into<CardId>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            card: card.into(),
            mode: MoveMode::Move,
        }
    }

    /// Duplicate instead of moving
    pub fn duplicating(mut self) -> Self {
        self.mode = MoveMode::Duplicate;
        self
    }
}

impl Execute<Board> for MoveCard {
    type Output = Outcome;

    fn execute(&self, board: &mut Board) -> Result<Outcome> {
        if board.find_column(&self.target).is_none() {
            tracing::debug!(column = %self.target, "move-card target column not found, ignoring");
            return Ok(Outcome::Ignored);
        }

        let Some(source) = board.find_column_mut(&self.source) else {
            tracing::debug!(column = %self.source, "move-card source column not found, ignoring");
            return Ok(Outcome::Ignored);
        };
        let Some(idx) = source.cards.iter().position(|c| c.id == self.card) else {
            tracing::debug!(card = %self.card, "card not found in source column, ignoring");
            return Ok(Outcome::Ignored);
        };

        let landing = match self.mode {
            MoveMode::Move => source.cards.remove(idx),
            MoveMode::Duplicate => source.cards[idx].duplicate(),
        };

        // Target existence was checked up front
        if let Some(target) = board.find_column_mut(&self.target) {
            target.cards.push(landing);
        }
        Ok(Outcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::types::Card;

    fn setup() -> Board {
        let mut board = Board::with_default_columns("B");
        AddCard::new("todo", Card::new("First").with_id("c1"))
            .execute(&mut board)
            .unwrap();
        board
    }

    #[test]
    fn test_move_between_columns() {
        let mut board = setup();
        let outcome = MoveCard::new("todo", "done", "c1")
            .execute(&mut board)
            .unwrap();
        assert!(outcome.applied());
        assert!(board.find_column(&"todo".into()).unwrap().cards.is_empty());
        let done = board.find_column(&"done".into()).unwrap();
        assert_eq!(done.cards.len(), 1);
        assert_eq!(done.cards[0].id.as_str(), "c1");
    }

    #[test]
    fn test_duplicate_leaves_source_untouched() {
        let mut board = setup();
        MoveCard::new("todo", "done", "c1")
            .duplicating()
            .execute(&mut board)
            .unwrap();

        let todo = board.find_column(&"todo".into()).unwrap();
        assert_eq!(todo.cards.len(), 1);
        assert_eq!(todo.cards[0].id.as_str(), "c1");

        let done = board.find_column(&"done".into()).unwrap();
        assert_eq!(done.cards.len(), 1);
        assert!(done.cards[0].id.as_str().starts_with("c1-copy-"));
        assert_eq!(done.cards[0].title, todo.cards[0].title);
    }

    #[test]
    fn test_card_missing_from_source_ignored() {
        let mut board = setup();
        let before = board.clone();
        let outcome = MoveCard::new("done", "todo", "c1")
            .execute(&mut board)
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(board, before);
    }

    #[test]
    fn test_missing_target_column_ignored() {
        let mut board = setup();
        let before = board.clone();
        let outcome = MoveCard::new("todo", "archive", "c1")
            .execute(&mut board)
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(board, before);
    }
}
