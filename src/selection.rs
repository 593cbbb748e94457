//! View-selection state
//!
//! Explicit state object owned by the view that renders the explorer and
//! passed by reference into whatever needs it. Constructed on view mount,
//! reset on navigation-away, never persisted. All mutation happens through
//! synchronous setters on the single UI thread.

use crate::types::ItemId;

/// An in-progress inline rename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    /// The item being renamed
    pub id: ItemId,
    /// The name as currently typed
    pub name: String,
}

/// Selection, inline-edit, and search state for one explorer view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_folder: Option<ItemId>,
    editing: Option<EditTarget>,
    search_query: String,
}

impl SelectionState {
    /// Create empty selection state (view mount)
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently open folder, if any
    pub fn selected_folder(&self) -> Option<&ItemId> {
        self.selected_folder.as_ref()
    }

    /// Open a folder
    pub fn select_folder(&mut self, id: impl Into<ItemId>) {
        self.selected_folder = Some(id.into());
    }

    /// Close the current folder
    pub fn clear_selection(&mut self) {
        self.selected_folder = None;
    }

    /// The in-progress rename, if any
    pub fn editing(&self) -> Option<&EditTarget> {
        self.editing.as_ref()
    }

    /// Start renaming an item, seeding the buffer with its current name
    pub fn begin_editing(&mut self, id: impl Into<ItemId>, name: impl Into<String>) {
        self.editing = Some(EditTarget {
            id: id.into(),
            name: name.into(),
        });
    }

    /// Replace the rename buffer with what has been typed so far
    pub fn update_editing(&mut self, name: impl Into<String>) {
        if let Some(editing) = &mut self.editing {
            editing.name = name.into();
        }
    }

    /// Finish the rename, yielding the edit target for the caller to apply
    pub fn finish_editing(&mut self) -> Option<EditTarget> {
        self.editing.take()
    }

    /// Abandon the rename without applying it
    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    /// The current search query ("" when the box is empty)
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Set the search query
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Clear the search box
    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    /// Reset everything (navigation-away)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let state = SelectionState::new();
        assert!(state.selected_folder().is_none());
        assert!(state.editing().is_none());
        assert_eq!(state.search_query(), "");
    }

    #[test]
    fn test_editing_lifecycle() {
        let mut state = SelectionState::new();
        state.begin_editing("a", "draft.md");
        state.update_editing("final.md");

        let done = state.finish_editing().unwrap();
        assert_eq!(done.id.as_str(), "a");
        assert_eq!(done.name, "final.md");
        assert!(state.editing().is_none());
    }

    #[test]
    fn test_update_without_begin_is_noop() {
        let mut state = SelectionState::new();
        state.update_editing("stray");
        assert!(state.editing().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = SelectionState::new();
        state.select_folder("f1");
        state.begin_editing("a", "x");
        state.set_search("plan");

        state.reset();
        assert_eq!(state, SelectionState::new());
    }
}
