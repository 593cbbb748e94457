//! RenameItem command

use crate::error::Result;
use crate::op::{Execute, Outcome};
use crate::tree::TreeStore;
use crate::types::ItemId;

/// Rename an item
///
/// Missing ids and empty names are soft failures. Name validation beyond
/// non-emptiness is the caller's responsibility, before building the
/// command.
#[derive(Debug, Clone)]
pub struct RenameItem {
    /// The item id to rename
    pub id: ItemId,
    /// The new display name
    pub name: String,
}

impl RenameItem {
    /// Create a new RenameItem command
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Execute<TreeStore> for RenameItem {
    type Output = Outcome;

    fn execute(&self, store: &mut TreeStore) -> Result<Outcome> {
        if self.name.is_empty() {
            tracing::debug!(id = %self.id, "empty rename, ignoring");
            return Ok(Outcome::Ignored);
        }
        match store.node_mut(&self.id) {
            Some(node) => {
                node.name = self.name.clone();
                Ok(Outcome::Applied)
            }
            None => {
                tracing::debug!(id = %self.id, "rename target not found, ignoring");
                Ok(Outcome::Ignored)
            }
        }
    }
}
