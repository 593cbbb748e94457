//! Typed ID newtypes
//!
//! Ids are strings on the wire (the persistence collaborator stores them as
//! text columns) but distinct types in the API so a card id can never be
//! passed where a tree item id is expected. Engine-assigned ids are ULIDs;
//! column and actor ids are caller-chosen slugs.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id! {
    /// Id of a tree item (file or folder)
    ItemId
}

string_id! {
    /// Id of a board column (slug, e.g. "todo")
    ColumnId
}

string_id! {
    /// Id of a card on the board
    CardId
}

string_id! {
    /// Id of an actor a card can be assigned to
    ActorId
}

impl ItemId {
    /// Generate a fresh item id
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl CardId {
    /// Generate a fresh card id
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }

    /// Derive the id for a duplicated card: `{id}-copy-{timestamp_millis}`
    pub fn derive_copy(&self) -> Self {
        let ts = chrono::Utc::now().timestamp_millis();
        Self(format!("{}-copy-{}", self.0, ts))
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_unique() {
        let a = ItemId::new();
        let b = ItemId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_string_round_trip() {
        let id = ColumnId::from_string("todo");
        assert_eq!(id.as_str(), "todo");
        assert_eq!(id.to_string(), "todo");
    }

    #[test]
    fn test_derive_copy_keeps_original_prefix() {
        let id = CardId::from_string("c1");
        let copy = id.derive_copy();
        assert!(copy.as_str().starts_with("c1-copy-"));
        assert_ne!(copy, id);
    }

    #[test]
    fn test_serde_transparent() {
        let id = ItemId::from_string("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
