//! AddItem command

use crate::error::Result;
use crate::op::{Execute, Outcome};
use crate::tree::TreeStore;
use crate::types::{Item, ItemId};

/// Add an item to the tree
///
/// With no parent the item is appended at root level; otherwise it is
/// appended to the parent folder's children. A missing or non-folder parent
/// is a soft failure (`Ignored`); a colliding id is a `DuplicateId` error.
#[derive(Debug, Clone)]
pub struct AddItem {
    /// Folder to insert under; `None` for root level
    pub parent: Option<ItemId>,
    /// The item (and any nested children) to insert
    pub item: Item,
}

impl AddItem {
    /// Create a root-level AddItem command
    pub fn new(item: Item) -> Self {
        Self { parent: None, item }
    }

    /// Insert under the given folder instead of at root level
    pub fn under(mut self, parent: impl Into<ItemId>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

impl Execute<TreeStore> for AddItem {
    type Output = Outcome;

    fn execute(&self, store: &mut TreeStore) -> Result<Outcome> {
        store.insert_subtree(self.parent.as_ref(), self.item.clone())
    }
}
