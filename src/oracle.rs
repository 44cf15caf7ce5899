// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Validity oracle.
//!
//! The single source of truth for the μ-coloring constraints:
//! 1. every assigned vertex `v` has `color(v) <= budget(v)`
//! 2. no edge has the same color at both (assigned) ends
//!
//! Unassigned vertices impose no constraint, so the same predicate judges
//! partial colorings in the middle of a search and total colorings at the end.
//! Both solvers choose candidate colors only through [`admits`], and classify
//! results only through [`is_valid`] / [`is_solution`].

use crate::graph::{Budgets, Color, Coloring, Graph, Vertex};
use std::fmt;

/// A single broken constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The coloring assigns a vertex the graph does not have.
    UnknownVertex { vertex: Vertex },

    /// A vertex's color exceeds its budget.
    BudgetExceeded {
        vertex: Vertex,
        color: Color,
        budget: Color,
    },

    /// Two adjacent vertices share a color. Reported once per edge, with `u < v`.
    Conflict { u: Vertex, v: Vertex, color: Color },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::UnknownVertex { vertex } => {
                write!(f, "vertex {} is not in the graph", vertex)
            }
            Violation::BudgetExceeded {
                vertex,
                color,
                budget,
            } => write!(
                f,
                "vertex {} has color {} but its budget is {}",
                vertex, color, budget
            ),
            Violation::Conflict { u, v, color } => {
                write!(f, "adjacent vertices {} and {} both have color {}", u, v, color)
            }
        }
    }
}

/// Constraints broken by giving `vertex` the color `color`, judged against its
/// budget and its currently colored neighbors.
///
/// `vertex`'s own current color is ignored, so this also answers "would
/// recoloring `vertex` be valid".
fn vertex_violations<'a>(
    graph: &'a Graph,
    budgets: &'a Budgets,
    coloring: &'a Coloring,
    vertex: Vertex,
    color: Color,
) -> impl Iterator<Item = Violation> + 'a {
    let budget = budgets.limit(vertex);
    let over_budget = (color > budget).then_some(Violation::BudgetExceeded {
        vertex,
        color,
        budget,
    });
    let conflicts = graph
        .adjacent(vertex)
        .iter()
        .filter(move |&&neighbor| coloring.get(neighbor) == Some(color))
        .map(move |&neighbor| Violation::Conflict {
            u: vertex.min(neighbor),
            v: vertex.max(neighbor),
            color,
        });
    over_budget.into_iter().chain(conflicts)
}

fn in_scope(graph: &Graph, budgets: &Budgets, vertex: Vertex) -> bool {
    graph.contains(vertex) && vertex < budgets.len()
}

/// Whether assigning `color` to `vertex` keeps the coloring valid.
///
/// Only `vertex`'s budget and its already-colored neighbors are consulted, so
/// for a coloring that is valid before the assignment, `admits` is exactly
/// `is_valid` of the coloring after it.
///
/// # Example
///
/// ```
/// use mu_coloring::graph::{Budgets, Coloring, Graph};
/// use mu_coloring::oracle;
///
/// let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
/// let budgets = Budgets::uniform(&graph, 1);
/// let coloring = Coloring::from_assignments(2, [(0, 0)]).unwrap();
///
/// assert!(!oracle::admits(&graph, &budgets, &coloring, 1, 0)); // same as neighbor
/// assert!(oracle::admits(&graph, &budgets, &coloring, 1, 1));
/// assert!(!oracle::admits(&graph, &budgets, &coloring, 1, 2)); // over budget
/// ```
pub fn admits(
    graph: &Graph,
    budgets: &Budgets,
    coloring: &Coloring,
    vertex: Vertex,
    color: Color,
) -> bool {
    in_scope(graph, budgets, vertex)
        && vertex_violations(graph, budgets, coloring, vertex, color)
            .next()
            .is_none()
}

/// Every constraint the coloring currently breaks.
///
/// Conflicts are listed once per edge. An empty result means [`is_valid`].
pub fn violations(graph: &Graph, budgets: &Budgets, coloring: &Coloring) -> Vec<Violation> {
    let mut found = Vec::new();
    for (vertex, color) in coloring.iter() {
        if !in_scope(graph, budgets, vertex) {
            found.push(Violation::UnknownVertex { vertex });
            continue;
        }
        found.extend(
            vertex_violations(graph, budgets, coloring, vertex, color).filter(|violation| {
                match violation {
                    Violation::Conflict { u, .. } => *u == vertex,
                    _ => true,
                }
            }),
        );
    }
    found
}

/// Whether the (possibly partial) coloring satisfies every constraint.
///
/// # Example
///
/// ```
/// use mu_coloring::graph::{Budgets, Coloring, Graph};
/// use mu_coloring::oracle;
///
/// let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
/// let budgets = Budgets::uniform(&graph, 2);
///
/// assert!(oracle::is_valid(&graph, &budgets, &Coloring::total(&[0, 1, 2])));
/// assert!(!oracle::is_valid(&graph, &budgets, &Coloring::total(&[0, 1, 0])));
/// ```
pub fn is_valid(graph: &Graph, budgets: &Budgets, coloring: &Coloring) -> bool {
    coloring.iter().all(|(vertex, color)| {
        in_scope(graph, budgets, vertex)
            && vertex_violations(graph, budgets, coloring, vertex, color)
                .next()
                .is_none()
    })
}

/// Whether the coloring colors every vertex of the graph and is valid.
pub fn is_solution(graph: &Graph, budgets: &Budgets, coloring: &Coloring) -> bool {
    coloring.len() == graph.vertex_count() && coloring.is_total() && is_valid(graph, budgets, coloring)
}
