//! Core types for the workspace engine

mod board;
mod card;
mod ids;
mod item;

// Re-export all types
pub use board::{Board, Column};
pub use card::{Card, ChecklistItem, Priority};
pub use ids::{ActorId, CardId, ColumnId, ItemId};
pub use item::{Item, ItemKind};
