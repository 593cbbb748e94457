//! RecolorItem command

use crate::error::Result;
use crate::op::{Execute, Outcome};
use crate::tree::TreeStore;
use crate::types::{ItemId, ItemKind};

/// Set the display color of a folder
///
/// Color validity is checked at the UI boundary via
/// [`color::validate_color`](crate::color::validate_color) before this
/// command is built; the store accepts whatever reaches it. Files and
/// missing ids are soft failures.
#[derive(Debug, Clone)]
pub struct RecolorItem {
    /// The folder id to recolor
    pub id: ItemId,
    /// The new color
    pub color: String,
}

impl RecolorItem {
    /// Create a new RecolorItem command
    pub fn new(id: impl Into<ItemId>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
        }
    }
}

impl Execute<TreeStore> for RecolorItem {
    type Output = Outcome;

    fn execute(&self, store: &mut TreeStore) -> Result<Outcome> {
        match store.node_mut(&self.id) {
            Some(node) if node.kind == ItemKind::Folder => {
                node.color = Some(self.color.clone());
                Ok(Outcome::Applied)
            }
            _ => {
                tracing::debug!(id = %self.id, "recolor target is missing or a file, ignoring");
                Ok(Outcome::Ignored)
            }
        }
    }
}
