//! Drop reconciliation
//!
//! Translates a drag-source id and drop-target id into a tree mutation,
//! independent of any particular input-event binding, so it can be
//! exercised without a DOM or a toolkit. The UI layer resolves its drag
//! state (press, move, release) down to the two ids and hands them here.

use crate::error::{Result, WorkspaceError};
use crate::op::{Execute, Outcome};
use crate::tree::{MoveItem, TreeStore};
use crate::types::ItemId;

/// Reconcile a completed drag against the tree
///
/// Dropping an item on itself is a soft no-op. If either end of the drag
/// is the protected item or lives inside its subtree, the drop is rejected
/// with a [`ProtectedItem`](WorkspaceError::ProtectedItem) error the UI
/// surfaces as a notice; the store is untouched. Everything else delegates
/// to [`MoveItem`].
#[derive(Debug, Clone)]
pub struct ResolveDrop {
    /// The dragged item
    pub source: ItemId,
    /// The item it was dropped on
    pub target: ItemId,
}

impl ResolveDrop {
    /// Create a new ResolveDrop command
    pub fn new(source: impl Into<ItemId>, target: impl Into<ItemId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Execute<TreeStore> for ResolveDrop {
    type Output = Outcome;

    fn execute(&self, store: &mut TreeStore) -> Result<Outcome> {
        if self.source == self.target {
            return Ok(Outcome::Ignored);
        }
        for id in [&self.source, &self.target] {
            if store.is_protected(id) {
                tracing::warn!(id = %id, "drop involves the protected item, rejecting");
                return Err(WorkspaceError::protected(id.as_str()));
            }
        }
        MoveItem::new(self.source.clone(), self.target.clone()).execute(store)
    }
}
