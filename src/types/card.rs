//! Card types: Card, Priority, ChecklistItem

use super::ids::{ActorId, CardId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Card priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// One entry of a card's checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl ChecklistItem {
    /// Create an unchecked checklist entry
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// A card on the kanban board
///
/// A card belongs to exactly one column at a time; the move and duplicate
/// operations preserve this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<ActorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Card {
    /// Create a new card with the given title and a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            title: title.into(),
            description: String::new(),
            priority: None,
            assignee: None,
            due_date: None,
            checklist: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Set the id (for cards rebuilt from rows)
    pub fn with_id(mut self, id: impl Into<CardId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Assign the card
    pub fn with_assignee(mut self, assignee: impl Into<ActorId>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the checklist
    pub fn with_checklist(mut self, checklist: Vec<ChecklistItem>) -> Self {
        self.checklist = checklist;
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Clone this card under a derived id, leaving the original untouched
    ///
    /// Every field except the id is copied verbatim.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = self.id.derive_copy();
        copy
    }
}
