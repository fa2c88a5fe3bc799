//! Domain entities: core data structures

use std::fmt;

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Unique course identifier, e.g. "CSCI200"
    pub identifier: String,
    /// Human-readable course title
    pub name: String,
    /// Identifiers of prerequisite courses, in source order.
    /// May reference courses that are not in the catalog.
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            prerequisites,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.identifier, self.name)
    }
}
