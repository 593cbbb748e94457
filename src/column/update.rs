//! UpdateColumn command

use crate::error::Result;
use crate::op::{Execute, Outcome};
use crate::types::{Board, ColumnId};

/// Rename and/or recolor a column
///
/// Only the fields set on the command are touched. A missing column is a
/// soft failure. Color validity is checked at the UI boundary, not here.
#[derive(Debug, Clone)]
pub struct UpdateColumn {
    /// The column ID to update
    pub id: ColumnId,
    /// New display title
    pub title: Option<String>,
    /// New accent color
    pub color: Option<String>,
}

impl UpdateColumn {
    /// Create a new UpdateColumn command
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            color: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the accent color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Execute<Board> for UpdateColumn {
    type Output = Outcome;

    fn execute(&self, board: &mut Board) -> Result<Outcome> {
        let Some(column) = board.find_column_mut(&self.id) else {
            tracing::debug!(column = %self.id, "update-column target not found, ignoring");
            return Ok(Outcome::Ignored);
        };
        if let Some(title) = &self.title {
            column.title = title.clone();
        }
        if let Some(color) = &self.color {
            column.color = color.clone();
        }
        Ok(Outcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_column() {
        let mut board = Board::with_default_columns("B");
        UpdateColumn::new("todo")
            .with_title("Backlog")
            .execute(&mut board)
            .unwrap();
        let column = board.find_column(&"todo".into()).unwrap();
        assert_eq!(column.title, "Backlog");
    }

    #[test]
    fn test_recolor_column_keeps_title() {
        let mut board = Board::with_default_columns("B");
        UpdateColumn::new("done")
            .with_color("#5319e7")
            .execute(&mut board)
            .unwrap();
        let column = board.find_column(&"done".into()).unwrap();
        assert_eq!(column.color, "#5319e7");
        assert_eq!(column.title, "Done");
    }

    #[test]
    fn test_update_missing_ignored() {
        let mut board = Board::with_default_columns("B");
        let outcome = UpdateColumn::new("archive")
            .with_title("x")
            .execute(&mut board)
            .unwrap();
        assert_eq!(outcome, Outcome::Ignored);
    }
}
