//! Tree item types: Item, ItemKind

use super::ids::ItemId;
use serde::{Deserialize, Serialize};

/// Whether a tree item is a file or a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    File,
    Folder,
}

/// A node in the document tree, in nested interchange form
///
/// This is the shape the persistence collaborator reads and writes (1:1
/// field mapping to rows). The engine itself holds items in a flat arena
/// ([`TreeStore`](crate::TreeStore)); `from_forest`/`to_forest` convert
/// between the two.
///
/// Invariants: ids are unique across the whole forest; a file has no
/// children; a folder's `children` order is its display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    /// Document body, files only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Ordered children, folders only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,
    /// Whether the folder is open in the explorer
    #[serde(default)]
    pub expanded: bool,
    /// Optional display color tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Item {
    /// Create a new empty file with a fresh id
    pub fn new_file(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind: ItemKind::File,
            content: None,
            children: Vec::new(),
            expanded: false,
            color: None,
        }
    }

    /// Create a new empty folder with a fresh id
    pub fn new_folder(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            kind: ItemKind::Folder,
            content: None,
            children: Vec::new(),
            expanded: false,
            color: None,
        }
    }

    /// Set the id (for interchange shapes built from rows)
    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the document body
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the children (folders only; ignored on files by the store)
    pub fn with_children(mut self, children: Vec<Item>) -> Self {
        self.children = children;
        self
    }

    /// Set the display color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Mark the folder as open
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    /// True for folders
    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file() {
        let item = Item::new_file("notes.md");
        assert_eq!(item.kind, ItemKind::File);
        assert!(item.children.is_empty());
        assert!(!item.expanded);
    }

    #[test]
    fn test_builder_chain() {
        let item = Item::new_folder("Projects")
            .with_id("f1")
            .with_color("#1d76db")
            .expanded();
        assert!(item.is_folder());
        assert_eq!(item.id.as_str(), "f1");
        assert_eq!(item.color.as_deref(), Some("#1d76db"));
        assert!(item.expanded);
    }

    #[test]
    fn test_serde_skips_empty_fields() {
        let item = Item::new_file("a").with_id("x");
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("content").is_none());
        assert!(json.get("children").is_none());
        assert_eq!(json["kind"], "file");
    }
}
