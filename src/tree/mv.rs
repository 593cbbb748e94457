//! MoveItem command

use crate::error::{Result, WorkspaceError};
use crate::op::{Execute, Outcome};
use crate::tree::TreeStore;
use crate::types::{ItemId, ItemKind};

/// Move an item (and its subtree) to a new location
///
/// A folder target receives the item as its last child and is opened; a
/// file target gets the item as its next sibling, at the target's nesting
/// level. Self-moves, missing ids, and moves into the item's own subtree
/// are soft failures. Any involvement of the protected item is a
/// [`ProtectedItem`](WorkspaceError::ProtectedItem) error with the store
/// unchanged.
#[derive(Debug, Clone)]
pub struct MoveItem {
    /// The item being moved
    pub dragged: ItemId,
    /// Where it is dropped
    pub target: ItemId,
}

impl MoveItem {
    /// Create a new MoveItem command
    pub fn new(dragged: impl Into<ItemId>, target: impl Into<ItemId>) -> Self {
        Self {
            dragged: dragged.into(),
            target: target.into(),
        }
    }
}

impl Execute<TreeStore> for MoveItem {
    type Output = Outcome;

    fn execute(&self, store: &mut TreeStore) -> Result<Outcome> {
        if self.dragged == self.target {
            return Ok(Outcome::Ignored);
        }
        for id in [&self.dragged, &self.target] {
            if store.is_protected(id) {
                tracing::warn!(id = %id, "move involves the protected item, rejecting");
                return Err(WorkspaceError::protected(id.as_str()));
            }
        }
        let target_kind = match store.kind(&self.target) {
            Some(kind) => kind,
            None => {
                tracing::debug!(target = %self.target, "move target not found, ignoring");
                return Ok(Outcome::Ignored);
            }
        };
        if !store.contains(&self.dragged) {
            tracing::debug!(dragged = %self.dragged, "moved item not found, ignoring");
            return Ok(Outcome::Ignored);
        }
        // Re-parenting under one's own subtree would orphan the target
        if store.descendants(&self.dragged).contains(&self.target) {
            tracing::debug!(
                dragged = %self.dragged,
                target = %self.target,
                "move target is inside the moved subtree, ignoring"
            );
            return Ok(Outcome::Ignored);
        }

        store.unlink(&self.dragged);
        match target_kind {
            ItemKind::Folder => {
                store.link_into_folder(&self.target, &self.dragged);
                if let Some(node) = store.node_mut(&self.target) {
                    node.expanded = true;
                }
            }
            ItemKind::File => {
                store.link_after(&self.target, &self.dragged);
            }
        }
        Ok(Outcome::Applied)
    }
}
