//! DeleteItem command

use crate::error::Result;
use crate::op::{Execute, Outcome};
use crate::tree::TreeStore;
use crate::types::ItemId;

/// Delete an item and its whole subtree, at any depth
///
/// A missing id is a soft failure: the store is returned unchanged.
#[derive(Debug, Clone)]
pub struct DeleteItem {
    /// The item id to delete
    pub id: ItemId,
}

impl DeleteItem {
    /// Create a new DeleteItem command
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self { id: id.into() }
    }
}

impl Execute<TreeStore> for DeleteItem {
    type Output = Outcome;

    fn execute(&self, store: &mut TreeStore) -> Result<Outcome> {
        if store.drop_subtree(&self.id) {
            Ok(Outcome::Applied)
        } else {
            tracing::debug!(id = %self.id, "delete target not found, ignoring");
            Ok(Outcome::Ignored)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn setup() -> TreeStore {
        TreeStore::from_forest(vec![
            Item::new_folder("Projects").with_id("f1").with_children(vec![
                Item::new_file("plan.md").with_id("a"),
                Item::new_folder("Archive")
                    .with_id("f2")
                    .with_children(vec![Item::new_file("old.md").with_id("o")]),
            ]),
            Item::new_file("readme.md").with_id("b"),
        ])
        .unwrap()
    }

    #[test]
    fn test_delete_file_in_folder() {
        let mut store = setup();
        let outcome = DeleteItem::new("a").execute(&mut store).unwrap();
        assert!(outcome.applied());
        assert!(!store.contains(&"a".into()));
        assert_eq!(
            store.children_of(&"f1".into()),
            Some(&["f2".into()][..])
        );
    }

    #[test]
    fn test_delete_removes_descendants() {
        let mut store = setup();
        DeleteItem::new("f1").execute(&mut store).unwrap();
        for gone in ["f1", "a", "f2", "o"] {
            assert!(!store.contains(&gone.into()));
        }
        // Sibling untouched
        assert!(store.contains(&"b".into()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_missing_ignored() {
        let mut store = setup();
        let before = store.to_forest();
        let outcome = DeleteItem::new("ghost").execute(&mut store).unwrap();
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(store.to_forest(), before);
    }
}
