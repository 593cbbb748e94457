//! Board-level types: Board, Column

use super::card::Card;
use super::ids::{CardId, ColumnId};
use serde::{Deserialize, Serialize};

/// The kanban board: a name and an ordered list of columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    /// Create an empty board with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Create a board with the default todo/doing/done columns
    pub fn with_default_columns(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Self::default_columns(),
        }
    }

    /// The default columns for a new board
    pub fn default_columns() -> Vec<Column> {
        vec![
            Column::new("todo", "To Do", "#1d76db"),
            Column::new("doing", "Doing", "#f9c513"),
            Column::new("done", "Done", "#0e8a16"),
        ]
    }

    /// Find a column by id
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find a column by id, mutably
    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// True if any column holds a card with this id
    pub fn contains_card(&self, id: &CardId) -> bool {
        self.columns
            .iter()
            .any(|c| c.cards.iter().any(|card| &card.id == id))
    }
}

/// A column defines a workflow stage and holds its cards in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cards: Vec<Card>,
}

impl Column {
    /// Create an empty column
    pub fn new(
        id: impl Into<ColumnId>,
        title: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            cards: Vec::new(),
        }
    }

    /// Set the cards (for columns rebuilt from rows)
    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }
}
