//! ToggleExpanded command

use crate::error::Result;
use crate::op::{Execute, Outcome};
use crate::tree::TreeStore;
use crate::types::{ItemId, ItemKind};

/// Flip a folder's open/closed state in the explorer
///
/// Files and missing ids are soft failures.
#[derive(Debug, Clone)]
pub struct ToggleExpanded {
    /// The folder id to toggle
    pub id: ItemId,
}

impl ToggleExpanded {
    /// Create a new ToggleExpanded command
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<TreeStore> for ToggleExpanded {
    type Output = Outcome;

    fn execute(&self, store: &mut TreeStore) -> Result<Outcome> {
        match store.node_mut(&self.id) {
            Some(node) if node.kind == ItemKind::Folder => {
                node.expanded = !node.expanded;
                Ok(Outcome::Applied)
            }
            _ => {
                tracing::debug!(id = %self.id, "toggle target is missing or a file, ignoring");
                Ok(Outcome::Ignored)
            }
        }
    }
}
