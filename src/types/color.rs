//! The two symbolic colors and the per-check color assignment.

use std::collections::HashMap;

use serde::Serialize;

/// One of the two classes a vertex can be assigned during a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    /// The color given to the start vertex.
    Red = 0,
    /// The color given to every neighbor of a red vertex.
    Blue = 1,
}

impl Color {
    /// The other color.
    pub fn opposite(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// Return a human-readable name for this color.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Color assignment produced by a single check, keyed by vertex label.
///
/// Lives outside the graph so the store is never mutated by a check and no
/// color state leaks between checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coloring {
    colors: HashMap<String, Color>,
}

impl Coloring {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// The color assigned to a label, if the traversal reached it.
    pub fn get(&self, label: &str) -> Option<Color> {
        self.colors.get(label).copied()
    }

    /// Number of vertices colored so far.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if no vertex has been colored.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Assign a color to a label. Assignment is write-once per check; a
    /// second assignment to the same label is a traversal bug.
    pub(crate) fn assign(&mut self, label: &str, color: Color) {
        let previous = self.colors.insert(label.to_string(), color);
        debug_assert!(previous.is_none(), "vertex '{label}' colored twice");
    }
}
