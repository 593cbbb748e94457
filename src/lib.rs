//! Document tree and kanban board engine for the opsdesk workspace
//!
//! This crate is the in-memory model behind the production workspace: the
//! document explorer (a forest of files and folders) and the kanban board
//! (columns of cards). Rendering, persistence, and the messaging gateway
//! live elsewhere; this engine owns the state and the mutation rules.
//!
//! ## Overview
//!
//! - **Arena-indexed tree** - items live in a flat `id -> node` map with
//!   ordered children lists, so lookup is O(1) and traversal never recurses
//! - **Commands** - every mutation is a command struct run through
//!   [`Execute`], synchronously (the model is a single UI event loop)
//! - **Soft failures** - operations on a missing id return
//!   [`Outcome::Ignored`] with the store unchanged; only invariant
//!   violations and protected-item rejections are errors
//! - **Protected item** - the imported-items container can never be moved
//!   and nothing can be moved into it
//!
//! ## Basic Usage
//!
//! ```rust
//! use opsdesk_workspace::{AddItem, Execute, Item, ResolveDrop, TreeStore};
//!
//! # fn example() -> opsdesk_workspace::Result<()> {
//! let mut store = TreeStore::new();
//! let folder = Item::new_folder("Projects");
//! let folder_id = folder.id.clone();
//! AddItem::new(folder).execute(&mut store)?;
//!
//! let note = Item::new_file("plan.md").with_content("# Plan");
//! let note_id = note.id.clone();
//! AddItem::new(note).execute(&mut store)?;
//!
//! // Drag the note into the folder
//! ResolveDrop::new(note_id, folder_id).execute(&mut store)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Interchange
//!
//! [`TreeStore::from_forest`] and [`TreeStore::to_forest`] convert between
//! the arena and the nested [`Item`] shape the persistence collaborator
//! serializes (1:1 field mapping to rows). [`Board`] serializes as-is.

pub mod board;
pub mod card;
pub mod color;
pub mod column;
mod drag;
mod error;
mod op;
mod selection;
pub mod tree;
pub mod types;

pub use board::filter_by_assignee;
pub use card::{AddCard, DeleteCard, MoveCard, MoveMode};
pub use column::{AddColumn, DeleteColumn, UpdateColumn};
pub use drag::ResolveDrop;
pub use error::{Result, WorkspaceError};
pub use op::{Execute, Outcome};
pub use selection::{EditTarget, SelectionState};
pub use tree::{
    AddItem, DeleteItem, MoveItem, RecolorItem, RenameItem, ToggleExpanded, TreeStore,
};

// Re-export commonly used types
pub use types::{
    ActorId, Board, Card, CardId, ChecklistItem, Column, ColumnId, Item, ItemId, ItemKind,
    Priority,
};
