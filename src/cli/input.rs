//! Path-token input layer — the boundary between raw text and the store.
//!
//! Input arrives as path tokens like `a-b-c`: vertex labels chained by
//! hyphens, each consecutive pair an undirected edge. Tokens are separated
//! by commas or newlines.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::graph::UndirectedGraph;
use crate::types::{BicolorError, BicolorResult};

/// Static path-token pattern — compiled once, used for every token.
static PATH_PATTERN: OnceLock<Regex> = OnceLock::new();

/// One or more word characters, chained by hyphens, at least two segments.
fn path_pattern() -> &'static Regex {
    PATH_PATTERN
        .get_or_init(|| Regex::new(r"^\w+(?:-\w+)+$").expect("path token regex must compile"))
}

/// Split raw textbox-style input into candidate tokens.
///
/// Splits on commas and newlines, then strips whitespace inside each
/// candidate and drops empties.
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.split([',', '\n'])
        .map(|part| {
            part.chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Validate a token and feed its consecutive-pair edges to the graph.
pub fn add_path(graph: &mut UndirectedGraph, token: &str) -> BicolorResult<()> {
    if !path_pattern().is_match(token) {
        return Err(BicolorError::InvalidPath(token.to_string()));
    }
    let labels: Vec<&str> = token.split('-').collect();
    for pair in labels.windows(2) {
        graph.add_edge(pair[0], pair[1]);
    }
    Ok(())
}

/// Build a graph from a whole block of raw input.
pub fn parse_input(raw: &str) -> BicolorResult<UndirectedGraph> {
    let mut graph = UndirectedGraph::new();
    for token in tokenize(raw) {
        add_path(&mut graph, &token)?;
    }
    Ok(graph)
}

/// Collect tokens from CLI arguments and an optional token file.
pub fn gather_tokens(args: &[String], file: Option<&Path>) -> BicolorResult<Vec<String>> {
    let mut tokens = Vec::new();
    for arg in args {
        tokens.extend(tokenize(arg));
    }
    if let Some(path) = file {
        tokens.extend(tokenize(&fs::read_to_string(path)?));
    }
    Ok(tokens)
}
