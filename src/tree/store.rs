//! TreeStore - arena-indexed document forest
//!
//! The store holds every item in a flat `id -> node` map with ordered
//! children id-lists and a roots id-list. Lookup by id is O(1); there are
//! no parent pointers, so parent resolution scans the children lists. All
//! traversals use an explicit stack rather than recursion, so deeply nested
//! trees cannot overflow the call stack.
//!
//! Commands do the mutating; the store provides the primitives.

use crate::error::{Result, WorkspaceError};
use crate::op::Outcome;
use crate::types::{Item, ItemId, ItemKind};
use std::collections::HashMap;

/// One item in the arena. Children are ids into the same arena.
#[derive(Debug, Clone)]
pub(super) struct Node {
    pub(super) name: String,
    pub(super) kind: ItemKind,
    pub(super) content: Option<String>,
    pub(super) expanded: bool,
    pub(super) color: Option<String>,
    pub(super) children: Vec<ItemId>,
}

/// An arena-indexed forest of document items
///
/// One node may be designated protected (the imported-items container):
/// it can never be moved, and nothing may be moved into its subtree.
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    nodes: HashMap<ItemId, Node>,
    roots: Vec<ItemId>,
    protected: Option<ItemId>,
}

impl TreeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a nested forest
    ///
    /// Fails with [`WorkspaceError::DuplicateId`] if any id appears twice;
    /// id uniqueness is global across the forest, not just among siblings.
    pub fn from_forest(forest: Vec<Item>) -> Result<Self> {
        let mut store = Self::new();
        for item in forest {
            store.insert_subtree(None, item)?;
        }
        Ok(store)
    }

    /// Rebuild the nested forest, preserving display order
    pub fn to_forest(&self) -> Vec<Item> {
        self.roots
            .iter()
            .filter_map(|id| self.item(id))
            .collect()
    }

    /// Rebuild one item and its whole subtree in nested form
    pub fn item(&self, id: &ItemId) -> Option<Item> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        // Pass 1: parent-before-children ordering via an explicit stack
        let mut order: Vec<ItemId> = Vec::new();
        let mut stack = vec![id.clone()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                order.push(current);
                stack.extend(node.children.iter().cloned());
            }
        }

        // Pass 2: assemble bottom-up, so every child exists before its parent
        let mut built: HashMap<ItemId, Item> = HashMap::new();
        for current in order.into_iter().rev() {
            let node = &self.nodes[&current];
            let children: Vec<Item> = node
                .children
                .iter()
                .filter_map(|c| built.remove(c))
                .collect();
            built.insert(
                current.clone(),
                Item {
                    id: current,
                    name: node.name.clone(),
                    kind: node.kind,
                    content: node.content.clone(),
                    children,
                    expanded: node.expanded,
                    color: node.color.clone(),
                },
            );
        }
        built.remove(id)
    }

    /// Number of items in the store
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the store holds no items
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if an item with this id exists
    pub fn contains(&self, id: &ItemId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Kind of the item, if present
    pub fn kind(&self, id: &ItemId) -> Option<ItemKind> {
        self.nodes.get(id).map(|n| n.kind)
    }

    /// Root-level ids in display order
    pub fn roots(&self) -> &[ItemId] {
        &self.roots
    }

    /// Children ids of a folder in display order
    pub fn children_of(&self, id: &ItemId) -> Option<&[ItemId]> {
        self.nodes.get(id).map(|n| n.children.as_slice())
    }

    /// Parent of an item; `None` for roots and missing ids
    pub fn parent_of(&self, id: &ItemId) -> Option<&ItemId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.children.contains(id))
            .map(|(pid, _)| pid)
    }

    /// Ids of the item's whole subtree (itself included), parent first
    pub fn descendants(&self, id: &ItemId) -> Vec<ItemId> {
        let mut out = Vec::new();
        let mut stack = vec![id.clone()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                out.push(current);
                stack.extend(node.children.iter().cloned());
            }
        }
        out
    }

    /// Designate the protected item (the imported-items container)
    pub fn protect(&mut self, id: impl Into<ItemId>) {
        self.protected = Some(id.into());
    }

    /// The protected id, if one is designated
    pub fn protected(&self) -> Option<&ItemId> {
        self.protected.as_ref()
    }

    /// True if the id is the protected item or lives inside its subtree
    pub fn is_protected(&self, id: &ItemId) -> bool {
        match &self.protected {
            None => false,
            Some(p) if p == id => true,
            Some(p) => self.descendants(p).contains(id),
        }
    }

    /// Ids of items whose name contains the query, case-insensitive,
    /// in pre-order display order
    pub fn search(&self, query: &str) -> Vec<ItemId> {
        let needle = query.to_lowercase();
        let mut out = Vec::new();
        let mut stack: Vec<ItemId> = self.roots.iter().rev().cloned().collect();
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.get(&current) {
                if node.name.to_lowercase().contains(&needle) {
                    out.push(current.clone());
                }
                stack.extend(node.children.iter().rev().cloned());
            }
        }
        out
    }

    // =========================================================================
    // Mutation primitives used by the commands
    // =========================================================================

    pub(super) fn node_mut(&mut self, id: &ItemId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Attach a nested item under a parent (or at root for `None`)
    ///
    /// Missing or non-folder parents are a soft failure. Duplicate ids,
    /// against the store or within the inserted subtree, are an error.
    pub(super) fn insert_subtree(
        &mut self,
        parent: Option<&ItemId>,
        item: Item,
    ) -> Result<Outcome> {
        if let Some(pid) = parent {
            match self.nodes.get(pid) {
                Some(node) if node.kind == ItemKind::Folder => {}
                _ => {
                    tracing::debug!(parent = %pid, "insert target is missing or not a folder, ignoring");
                    return Ok(Outcome::Ignored);
                }
            }
        }

        // Uniqueness check over the whole incoming subtree, before touching
        // the arena, so a rejected insert leaves the store unchanged.
        let mut incoming: Vec<&ItemId> = Vec::new();
        let mut stack = vec![&item];
        while let Some(current) = stack.pop() {
            if self.nodes.contains_key(&current.id) || incoming.contains(&&current.id) {
                return Err(WorkspaceError::duplicate_id("item", current.id.as_str()));
            }
            incoming.push(&current.id);
            stack.extend(current.children.iter());
        }

        let mut stack: Vec<(Option<ItemId>, Item)> = vec![(parent.cloned(), item)];
        while let Some((slot, mut current)) = stack.pop() {
            let children = std::mem::take(&mut current.children);
            if current.kind == ItemKind::File && !children.is_empty() {
                tracing::debug!(id = %current.id, "file carried children, dropping them");
            }

            let id = current.id;
            self.nodes.insert(
                id.clone(),
                Node {
                    name: current.name,
                    kind: current.kind,
                    content: current.content,
                    expanded: current.expanded,
                    color: current.color,
                    children: Vec::new(),
                },
            );
            match &slot {
                Some(pid) => {
                    if let Some(parent_node) = self.nodes.get_mut(pid) {
                        parent_node.children.push(id.clone());
                    }
                }
                None => self.roots.push(id.clone()),
            }

            if current.kind == ItemKind::Folder {
                for child in children.into_iter().rev() {
                    stack.push((Some(id.clone()), child));
                }
            }
        }
        Ok(Outcome::Applied)
    }

    /// Detach an id from its parent slot, keeping its nodes in the arena
    pub(super) fn unlink(&mut self, id: &ItemId) -> bool {
        if let Some(idx) = self.roots.iter().position(|r| r == id) {
            self.roots.remove(idx);
            return true;
        }
        if let Some(pid) = self.parent_of(id).cloned() {
            if let Some(parent_node) = self.nodes.get_mut(&pid) {
                parent_node.children.retain(|c| c != id);
                return true;
            }
        }
        false
    }

    /// Unlink an id and remove its whole subtree from the arena
    pub(super) fn drop_subtree(&mut self, id: &ItemId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        let doomed = self.descendants(id);
        self.unlink(id);
        for gone in doomed {
            self.nodes.remove(&gone);
        }
        true
    }

    /// Append a detached id as the last child of a folder
    pub(super) fn link_into_folder(&mut self, folder: &ItemId, id: &ItemId) -> bool {
        match self.nodes.get_mut(folder) {
            Some(node) if node.kind == ItemKind::Folder => {
                node.children.push(id.clone());
                true
            }
            _ => false,
        }
    }

    /// Insert a detached id as a sibling immediately after the target,
    /// at the target's nesting level
    pub(super) fn link_after(&mut self, target: &ItemId, id: &ItemId) -> bool {
        if let Some(idx) = self.roots.iter().position(|r| r == target) {
            self.roots.insert(idx + 1, id.clone());
            return true;
        }
        if let Some(pid) = self.parent_of(target).cloned() {
            if let Some(parent_node) = self.nodes.get_mut(&pid) {
                if let Some(idx) = parent_node.children.iter().position(|c| c == target) {
                    parent_node.children.insert(idx + 1, id.clone());
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn sample_forest() -> Vec<Item> {
        vec![
            Item::new_folder("Projects").with_id("f1").with_children(vec![
                Item::new_file("plan.md").with_id("a"),
                Item::new_folder("Archive").with_id("f2"),
            ]),
            Item::new_file("readme.md").with_id("b"),
        ]
    }

    #[test]
    fn test_from_forest_round_trip() {
        let forest = sample_forest();
        let store = TreeStore::from_forest(forest.clone()).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.to_forest(), forest);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let forest = vec![
            Item::new_file("one").with_id("x"),
            Item::new_file("two").with_id("x"),
        ];
        let result = TreeStore::from_forest(forest);
        assert!(matches!(
            result,
            Err(WorkspaceError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_file_children_dropped() {
        let forest = vec![Item {
            children: vec![Item::new_file("stray").with_id("s")],
            ..Item::new_file("weird").with_id("w")
        }];
        let store = TreeStore::from_forest(forest).unwrap();
        assert!(store.contains(&"w".into()));
        assert!(!store.contains(&"s".into()));
    }

    #[test]
    fn test_parent_of() {
        let store = TreeStore::from_forest(sample_forest()).unwrap();
        assert_eq!(store.parent_of(&"a".into()), Some(&"f1".into()));
        assert_eq!(store.parent_of(&"b".into()), None);
        assert_eq!(store.parent_of(&"nope".into()), None);
    }

    #[test]
    fn test_descendants() {
        let store = TreeStore::from_forest(sample_forest()).unwrap();
        let ids = store.descendants(&"f1".into());
        assert_eq!(ids.len(), 3);
        assert!(ids.contains(&"a".into()));
        assert!(ids.contains(&"f2".into()));
    }

    #[test]
    fn test_is_protected_covers_subtree() {
        let mut store = TreeStore::from_forest(sample_forest()).unwrap();
        store.protect("f1");
        assert!(store.is_protected(&"f1".into()));
        assert!(store.is_protected(&"a".into()));
        assert!(!store.is_protected(&"b".into()));
    }

    #[test]
    fn test_search_case_insensitive_preorder() {
        let store = TreeStore::from_forest(sample_forest()).unwrap();
        let hits = store.search("AR");
        assert_eq!(hits, vec!["f2".into()]);
        // Empty query matches everything, pre-order
        let all = store.search("");
        assert_eq!(all, vec!["f1".into(), "a".into(), "f2".into(), "b".into()]);
    }
}
