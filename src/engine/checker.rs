//! Two-coloring engine — iterative depth-first traversal with conflict
//! detection and early termination.

use crate::graph::UndirectedGraph;
use crate::types::{BicolorError, BicolorResult, Color, Coloring};

/// Outcome of a colorability check.
///
/// `colorable` and `message` form the user-facing verdict; the coloring is
/// carried alongside so the caller can render the graph. On failure the
/// coloring is partial — whatever the traversal assigned before stopping.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Whether every edge joins two differently colored vertices.
    pub colorable: bool,
    /// Human-readable verdict, suitable for a status banner.
    pub message: String,
    /// The color assignment produced by the traversal.
    pub coloring: Coloring,
}

/// Check whether the graph is red/blue colorable.
///
/// Starts from the first vertex in insertion order, which always receives
/// red, and visits each vertex's neighbors in list order, so the outcome is
/// deterministic for a given sequence of `add_edge` calls. A graph the
/// traversal cannot fully cover from that single start is reported as not
/// colorable even if each component is independently bipartite.
pub fn check(graph: &UndirectedGraph) -> CheckOutcome {
    let mut coloring = Coloring::new();
    if graph.is_empty() {
        return CheckOutcome {
            colorable: true,
            message: String::new(),
            coloring,
        };
    }

    let verdict = match paint(graph, &mut coloring) {
        Ok(()) if coloring.len() < graph.vertex_count() => Err(BicolorError::NotConnected),
        other => other,
    };

    match verdict {
        Ok(()) => CheckOutcome {
            colorable: true,
            message: "Yes, graph is red blue colorable.".to_string(),
            coloring,
        },
        Err(reason) => CheckOutcome {
            colorable: false,
            message: reason.to_string(),
            coloring,
        },
    }
}

/// Depth-first two-coloring from the first vertex in insertion order.
///
/// Each stack entry carries the vertex to color, the color the pending edge
/// demands, and the neighbor that demanded it. A vertex already holding a
/// different color than demanded shares its color with the origin — the
/// conflict the check exists to find. Neighbors are pushed in reverse list
/// order so LIFO popping visits them in insertion order.
fn paint(graph: &UndirectedGraph, coloring: &mut Coloring) -> BicolorResult<()> {
    let Some(start) = graph.vertices().first() else {
        return Ok(());
    };

    let mut stack: Vec<(&str, Color, Option<&str>)> = vec![(start.label(), Color::Red, None)];

    while let Some((label, expected, origin)) = stack.pop() {
        if let Some(current) = coloring.get(label) {
            if current != expected {
                if let Some(origin) = origin {
                    return Err(BicolorError::Conflict {
                        a: origin.to_string(),
                        b: label.to_string(),
                        color: current,
                    });
                }
            }
            continue;
        }

        // Adjacency must never reference a label the store does not hold.
        debug_assert!(graph.contains(label), "dangling neighbor '{label}'");

        log::debug!("visiting '{label}' as {expected}");
        coloring.assign(label, expected);

        let next = expected.opposite();
        for neighbor in graph.neighbors(label).iter().rev() {
            stack.push((neighbor.as_str(), next, Some(label)));
        }
    }

    Ok(())
}
