//! Render-facing views — the only data handed to a visualization layer.
//!
//! Colors stay symbolic here; mapping them to pixels, shapes, or physics is
//! entirely the presentation layer's concern.

use serde::Serialize;

use crate::types::{Color, Coloring};

use super::UndirectedGraph;

/// A vertex descriptor for external rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    /// Stable node identifier (the vertex label).
    pub id: String,
    /// Display label (same as `id`).
    pub label: String,
    /// Assigned symbolic color, absent if the traversal never reached the
    /// vertex. The display layer chooses the default for absent colors.
    pub color: Option<Color>,
}

/// A single undirected edge, emitted once per underlying pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    /// One endpoint label.
    pub from: String,
    /// The other endpoint label.
    pub to: String,
}

/// Vertex descriptors in insertion order, with colors from the assignment.
pub fn node_views(graph: &UndirectedGraph, coloring: &Coloring) -> Vec<NodeView> {
    graph
        .vertices()
        .iter()
        .map(|v| NodeView {
            id: v.label().to_string(),
            label: v.label().to_string(),
            color: coloring.get(v.label()),
        })
        .collect()
}

/// Deduplicated edges in insertion order.
pub fn edge_views(graph: &UndirectedGraph) -> Vec<EdgeView> {
    graph
        .unique_edges()
        .into_iter()
        .map(|(from, to)| EdgeView {
            from: from.to_string(),
            to: to.to_string(),
        })
        .collect()
}
