//! AddColumn command

use crate::color;
use crate::error::{Result, WorkspaceError};
use crate::op::{Execute, Outcome};
use crate::types::{Board, Column, ColumnId};

/// Add a new column at the end of the board
///
/// A colliding column id is a `DuplicateId` error.
#[derive(Debug, Clone)]
pub struct AddColumn {
    /// The column ID (slug)
    pub id: ColumnId,
    /// The column display title
    pub title: String,
    /// Accent color; defaults to the deterministic palette pick for the id
    pub color: Option<String>,
}

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: None,
        }
    }

    /// Set the accent color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Execute<Board> for AddColumn {
    type Output = Outcome;

    fn execute(&self, board: &mut Board) -> Result<Outcome> {
        if board.find_column(&self.id).is_some() {
            return Err(WorkspaceError::duplicate_id("column", self.id.as_str()));
        }
        let accent = self
            .color
            .clone()
            .unwrap_or_else(|| color::auto_color(self.id.as_str()).to_string());
        board
            .columns
            .push(Column::new(self.id.clone(), self.title.clone(), accent));
        Ok(Outcome::Applied)
    }
}
