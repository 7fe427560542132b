//! bicolor — red/blue 2-coloring checker for undirected graphs.
//!
//! Builds an undirected graph from labeled edges and determines whether its
//! vertices can be split into two classes such that every edge joins vertices
//! of different classes. The check produces a per-vertex color assignment and
//! a human-readable verdict.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{check, CheckOutcome};
pub use graph::{edge_views, node_views, EdgeView, NodeView, UndirectedGraph};
pub use types::{BicolorError, BicolorResult, Color, Coloring, Vertex};
