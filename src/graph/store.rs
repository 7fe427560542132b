//! Core graph structure — insertion-ordered vertices with undirected adjacency.

use std::collections::{HashMap, HashSet};

use crate::types::Vertex;

/// The in-memory undirected graph.
///
/// Vertices are kept in insertion order so traversal start and rendering
/// order are deterministic for a given sequence of [`add_edge`] calls; a
/// label index makes adjacency lookups O(1).
///
/// [`add_edge`]: UndirectedGraph::add_edge
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    /// All vertices, in first-seen order.
    vertices: Vec<Vertex>,
    /// Label -> position in `vertices`.
    index: HashMap<String, usize>,
}

impl UndirectedGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True if a vertex with this label exists.
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Get a vertex by label.
    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.index.get(label).map(|&i| &self.vertices[i])
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Neighbor labels of a vertex in insertion order, empty if unknown.
    pub fn neighbors(&self, label: &str) -> &[String] {
        self.vertex(label).map(Vertex::neighbors).unwrap_or(&[])
    }

    /// Add an undirected edge between two labels.
    ///
    /// Both vertices are created if missing, and each is appended to the
    /// other's neighbor list unless already present. Idempotent: repeating
    /// the call, or swapping the endpoints, leaves the graph unchanged.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        let ia = self.ensure_vertex(a);
        self.vertices[ia].push_neighbor(b);
        let ib = self.ensure_vertex(b);
        self.vertices[ib].push_neighbor(a);
    }

    /// Every underlying edge exactly once, in insertion order.
    ///
    /// Walks vertices in insertion order and their neighbor lists in list
    /// order, keeping a side-set of already-emitted adjacency per vertex: a
    /// pair is emitted and recorded on both endpoints only when neither
    /// endpoint already records the other. O(V+E), and symmetric insertion
    /// never yields both `{a,b}` and `{b,a}`.
    pub fn unique_edges(&self) -> Vec<(&str, &str)> {
        let mut emitted: HashMap<&str, HashSet<&str>> = HashMap::new();
        let mut edges = Vec::new();
        for vertex in &self.vertices {
            let from = vertex.label();
            for to in vertex.neighbors() {
                let to = to.as_str();
                let seen = emitted.get(from).is_some_and(|s| s.contains(to))
                    || emitted.get(to).is_some_and(|s| s.contains(from));
                if !seen {
                    edges.push((from, to));
                    emitted.entry(from).or_default().insert(to);
                    emitted.entry(to).or_default().insert(from);
                }
            }
        }
        edges
    }

    /// Index of the label, inserting a fresh vertex if new.
    fn ensure_vertex(&mut self, label: &str) -> usize {
        if let Some(&i) = self.index.get(label) {
            return i;
        }
        let i = self.vertices.len();
        self.vertices.push(Vertex::new(label));
        self.index.insert(label.to_string(), i);
        i
    }
}
