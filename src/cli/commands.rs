//! CLI command implementations.

use std::path::Path;

use crate::engine::check;
use crate::graph::{edge_views, node_views, UndirectedGraph};
use crate::types::{BicolorResult, Color};

use super::input;

/// Display value for red vertices.
const RED_DISPLAY: &str = "#e06c78";
/// Display value for blue and uncolored vertices.
const BLUE_DISPLAY: &str = "#42A5F5";

/// Build a graph from argument tokens plus an optional token file.
fn build_graph(tokens: &[String], file: Option<&Path>) -> BicolorResult<UndirectedGraph> {
    let mut graph = UndirectedGraph::new();
    for token in input::gather_tokens(tokens, file)? {
        input::add_path(&mut graph, &token)?;
    }
    Ok(graph)
}

/// Check colorability and print the verdict.
///
/// Returns the verdict so the caller can map it onto the process exit code.
pub fn cmd_check(tokens: &[String], file: Option<&Path>, json: bool) -> BicolorResult<bool> {
    let graph = build_graph(tokens, file)?;
    let outcome = check(&graph);

    if json {
        let payload = serde_json::json!({
            "colorable": outcome.colorable,
            "message": outcome.message,
            "nodes": node_views(&graph, &outcome.coloring),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_default()
        );
    } else {
        println!("{}", outcome.message);
    }
    Ok(outcome.colorable)
}

/// Export the graph as JSON for a visualization layer.
pub fn cmd_export(
    tokens: &[String],
    file: Option<&Path>,
    nodes_only: bool,
    display: bool,
    pretty: bool,
) -> BicolorResult<()> {
    let graph = build_graph(tokens, file)?;
    let outcome = check(&graph);
    let nodes = node_views(&graph, &outcome.coloring);

    let nodes_json: Vec<serde_json::Value> = if display {
        nodes
            .iter()
            .map(|n| {
                serde_json::json!({
                    "id": n.id,
                    "label": n.label,
                    "color": display_color(n.color),
                })
            })
            .collect()
    } else {
        nodes
            .iter()
            .map(|n| serde_json::to_value(n).unwrap_or_default())
            .collect()
    };

    let payload = if nodes_only {
        serde_json::json!({ "nodes": nodes_json })
    } else {
        serde_json::json!({ "nodes": nodes_json, "edges": edge_views(&graph) })
    };

    let text = if pretty {
        serde_json::to_string_pretty(&payload)
    } else {
        serde_json::to_string(&payload)
    };
    println!("{}", text.unwrap_or_default());
    Ok(())
}

/// Map a symbolic color to the display palette. Unset renders as the blue
/// display value so every node gets a color.
fn display_color(color: Option<Color>) -> &'static str {
    match color {
        Some(Color::Red) => RED_DISPLAY,
        _ => BLUE_DISPLAY,
    }
}
