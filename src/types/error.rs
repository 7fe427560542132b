//! Error types for the bicolor library.

use thiserror::Error;

use super::Color;

/// All errors that can occur in the bicolor library.
#[derive(Error, Debug)]
pub enum BicolorError {
    /// Two adjacent vertices ended up with the same color.
    #[error("Two adjacent nodes have same color: '{a}' and '{b}' are both {color}")]
    Conflict {
        /// The vertex whose neighbor list exposed the conflict.
        a: String,
        /// The already-colored neighbor.
        b: String,
        /// The color both vertices hold.
        color: Color,
    },

    /// Traversal from the start vertex did not reach every vertex.
    #[error("Graph is not connected.")]
    NotConnected,

    /// A path token did not match the `A-B-C` form.
    #[error("Invalid path token: '{0}'")]
    InvalidPath(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for bicolor operations.
pub type BicolorResult<T> = Result<T, BicolorError>;
