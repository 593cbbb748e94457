//! Error types for the workspace engine

use thiserror::Error;

/// Result type for workspace operations
pub type Result<T> = std::result::Result<T, WorkspaceError>;

/// Errors that can occur in workspace operations
///
/// Missing targets are deliberately not errors: operations on an absent id
/// return [`Outcome::Ignored`](crate::Outcome) and leave the store unchanged.
/// Only invariant violations and protected-node rejections surface here.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// The item is protected and cannot be moved or receive moved items
    #[error("item is protected and cannot be moved or modified: {id}")]
    ProtectedItem { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Color rejected by the UI-boundary acceptance check
    #[error("invalid color: {value}")]
    InvalidColor { value: String },
}

impl WorkspaceError {
    /// Create a protected-item error
    pub fn protected(id: impl Into<String>) -> Self {
        Self::ProtectedItem { id: id.into() }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
        }
    }
}
