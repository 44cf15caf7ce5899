// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text readers for graphs, budgets and colorings.
//!
//! All three formats are line based:
//!
//! ```text
//! # adjacency: <id> <neighbor>...
//! 0 1 2
//! 1 0
//! 2 0
//!
//! # budgets: <id> <mu>
//! 0 1
//! 1 0
//! 2 0
//!
//! # coloring: <id> <color>
//! 0 1
//! 1 0
//! ```
//!
//! Text after `#` is a comment and blank lines are skipped. Line numbers in
//! errors are 1-based.

use super::{Budgets, Color, Coloring, Graph, Vertex};
use crate::error::{Malformation, Result};
use std::collections::BTreeMap;

/// One non-blank input line, split into integer tokens.
struct Line {
    number: usize,
    values: Vec<i64>,
}

fn lines(text: &str) -> Result<Vec<Line>> {
    let mut out = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let number = index + 1;
        let content = raw.split('#').next().unwrap_or_default();
        let values = content
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| Malformation::UnparsableToken {
                    line: number,
                    token: token.to_string(),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if !values.is_empty() {
            out.push(Line { number, values });
        }
    }
    Ok(out)
}

fn vertex_id(line: usize, id: i64) -> Result<Vertex> {
    Vertex::try_from(id).map_err(|_| Malformation::NegativeId { line, id }.into())
}

/// Parse an adjacency listing, one line per vertex: `<id> <neighbor>...`.
///
/// Ids must cover `0..n` exactly once, where `n` is the number of lines.
/// Neighbor ids outside that range, negative ids, and edges listed from only
/// one end are rejected.
///
/// # Example
///
/// ```
/// use mu_coloring::graph::parse::parse_adjacency;
///
/// let graph = parse_adjacency("0 1\n1 0 2\n2 1\n").unwrap();
/// assert_eq!(graph.edge_count(), 2);
/// assert!(parse_adjacency("0 1\n1\n").is_err()); // 1 does not list 0
/// ```
pub fn parse_adjacency(text: &str) -> Result<Graph> {
    let mut rows: BTreeMap<Vertex, Vec<Vertex>> = BTreeMap::new();
    for line in lines(text)? {
        let vertex = vertex_id(line.number, line.values[0])?;
        let neighbors = line.values[1..]
            .iter()
            .map(|&id| vertex_id(line.number, id))
            .collect::<Result<Vec<_>>>()?;
        if rows.insert(vertex, neighbors).is_some() {
            return Err(Malformation::DuplicateVertex(vertex).into());
        }
    }

    let vertex_count = rows.len();
    if let Some(missing) = (0..vertex_count).find(|v| !rows.contains_key(v)) {
        return Err(Malformation::MissingVertex(missing).into());
    }
    let lists: Vec<Vec<Vertex>> = rows.into_values().collect();
    Graph::from_adjacency(&lists)
}

/// Parse a budget listing for `graph`, one line per vertex: `<id> <mu>`.
pub fn parse_budgets(text: &str, graph: &Graph) -> Result<Budgets> {
    let mut map = BTreeMap::new();
    for (_, vertex, budget) in pairs(text, "budget")? {
        if map.insert(vertex, budget).is_some() {
            return Err(Malformation::DuplicateVertex(vertex).into());
        }
    }
    Budgets::from_map(graph, &map)
}

/// Parse a (possibly partial) coloring of `graph`: `<id> <color>` per line.
pub fn parse_coloring(text: &str, graph: &Graph) -> Result<Coloring> {
    let mut coloring = Coloring::for_graph(graph);
    let mut seen = vec![false; graph.vertex_count()];
    for (line, vertex, color) in pairs(text, "color")? {
        if !graph.contains(vertex) {
            return Err(graph.unknown(vertex));
        }
        if std::mem::replace(&mut seen[vertex], true) {
            return Err(Malformation::DuplicateVertex(vertex).into());
        }
        let color = Color::try_from(color).map_err(|_| Malformation::MalformedLine {
            line,
            reason: format!("color {} for vertex {} is not a valid color index", color, vertex),
        })?;
        coloring.assign(vertex, color)?;
    }
    Ok(coloring)
}

/// `<id> <value>` lines as `(line, vertex, value)`, with the value left signed
/// for the caller to check.
fn pairs(text: &str, what: &str) -> Result<Vec<(usize, Vertex, i64)>> {
    lines(text)?
        .into_iter()
        .map(|line| match line.values[..] {
            [id, value] => Ok((line.number, vertex_id(line.number, id)?, value)),
            _ => Err(Malformation::MalformedLine {
                line: line.number,
                reason: format!("expected '<id> <{}>', found {} values", what, line.values.len()),
            }
            .into()),
        })
        .collect()
}
