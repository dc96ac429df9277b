//! Person record
//!
//! The immutable input record for resolution. Parent and child links are
//! carried as ids, never as object references; they are resolved against a
//! population snapshot at query time, and ids with no matching person are
//! simply invisible to lookups.

use serde::{Deserialize, Serialize};

use crate::models::types::{Gender, PersonId};

/// A single person in a population snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier within the snapshot
    pub id: PersonId,
    /// Display name
    pub name: String,
    /// Gender, used only by consumers for presentation
    #[serde(default)]
    pub gender: Gender,
    /// Ids of this person's parents (0..=2 in well-formed data)
    #[serde(default)]
    pub parents: Vec<PersonId>,
    /// Ids of this person's children
    #[serde(default)]
    pub children: Vec<PersonId>,
}

impl Person {
    /// Create a person with no parent or child links
    #[must_use]
    pub fn new(id: PersonId, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the parent ids for this person
    #[must_use]
    pub fn with_parents(mut self, parents: Vec<PersonId>) -> Self {
        self.parents = parents;
        self
    }

    /// Set the child ids for this person
    #[must_use]
    pub fn with_children(mut self, children: Vec<PersonId>) -> Self {
        self.children = children;
        self
    }

    /// Whether this person lists `id` among their parents
    #[must_use]
    pub fn lists_parent(&self, id: PersonId) -> bool {
        self.parents.contains(&id)
    }

    /// Whether this person lists `id` among their children
    #[must_use]
    pub fn lists_child(&self, id: PersonId) -> bool {
        self.children.contains(&id)
    }

    /// Whether this person and `other` list at least one child id in common
    #[must_use]
    pub fn shares_child_with(&self, other: &Self) -> bool {
        self.children.iter().any(|id| other.lists_child(*id))
    }
}
