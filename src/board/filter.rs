//! Assignee filter projection

use crate::types::{ActorId, Board};

/// Project the board down to one assignee's cards
///
/// Returns a view where every column keeps only cards assigned to the given
/// actor. `None` means no filtering: the result is the board unchanged
/// (identity). This is a display projection, not a mutation; the input
/// board is untouched.
pub fn filter_by_assignee(board: &Board, assignee: Option<&ActorId>) -> Board {
    let Some(assignee) = assignee else {
        return board.clone();
    };
    let mut view = board.clone();
    for column in &mut view.columns {
        column
            .cards
            .retain(|card| card.assignee.as_ref() == Some(assignee));
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::op::Execute;
    use crate::types::{Board, Card};

    fn setup() -> Board {
        let mut board = Board::with_default_columns("B");
        AddCard::new("todo", Card::new("Mine").with_id("c1").with_assignee("ana"))
            .execute(&mut board)
            .unwrap();
        AddCard::new("todo", Card::new("Theirs").with_id("c2").with_assignee("leo"))
            .execute(&mut board)
            .unwrap();
        AddCard::new("doing", Card::new("Nobody's").with_id("c3"))
            .execute(&mut board)
            .unwrap();
        board
    }

    #[test]
    fn test_none_is_identity() {
        let board = setup();
        assert_eq!(filter_by_assignee(&board, None), board);
    }

    #[test]
    fn test_filters_every_column() {
        let board = setup();
        let view = filter_by_assignee(&board, Some(&"ana".into()));

        let todo = view.find_column(&"todo".into()).unwrap();
        assert_eq!(todo.cards.len(), 1);
        assert_eq!(todo.cards[0].id.as_str(), "c1");
        assert!(view.find_column(&"doing".into()).unwrap().cards.is_empty());

        // The input board is untouched
        assert_eq!(board.find_column(&"todo".into()).unwrap().cards.len(), 2);
    }
}
