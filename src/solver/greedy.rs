// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy heuristic: one pass, no backtracking.
//!
//! Each vertex, in order, gets the smallest color the oracle admits; a vertex
//! with no admissible color is left uncolored and the pass moves on. A failed
//! pass proves nothing about whether a coloring exists.

use super::VertexOrder;
use crate::error::Result;
use crate::graph::{Budgets, Coloring, Graph, Vertex};
use crate::oracle;
use crate::outcome::Outcome;
use tracing::{debug, trace};

/// Everything a greedy pass produced, including its partial coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyRun {
    /// `Solved` or `NoSolution`; greedy never reports `Unknown`.
    pub outcome: Outcome,

    /// The coloring as the pass left it, total exactly when solved.
    pub coloring: Coloring,

    /// Vertices with no admissible color when their turn came, ascending.
    pub unassigned: Vec<Vertex>,
}

/// Greedy coloring in ascending-budget order.
///
/// # Example
///
/// ```
/// use mu_coloring::graph::{Budgets, Graph};
/// use mu_coloring::solver::solve_greedy;
///
/// let triangle = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
/// let budgets = Budgets::uniform(&triangle, 2);
/// let outcome = solve_greedy(&triangle, &budgets).unwrap();
/// assert_eq!(outcome.coloring().unwrap().distinct_colors(), 3);
/// ```
pub fn solve_greedy(graph: &Graph, budgets: &Budgets) -> Result<Outcome> {
    Ok(run_greedy(graph, budgets, &VertexOrder::AscendingBudget)?.outcome)
}

/// Greedy coloring over a caller-chosen permutation of the vertices.
pub fn solve_greedy_in_order(graph: &Graph, budgets: &Budgets, order: &[Vertex]) -> Result<Outcome> {
    Ok(run_greedy(graph, budgets, &VertexOrder::Explicit(order.to_vec()))?.outcome)
}

/// Run one greedy pass and keep the partial result.
pub fn run_greedy(graph: &Graph, budgets: &Budgets, order: &VertexOrder) -> Result<GreedyRun> {
    budgets.ensure_covers(graph)?;
    let order = order.resolve(graph, budgets)?;

    let mut coloring = Coloring::for_graph(graph);
    let mut unassigned = Vec::new();

    for vertex in order {
        let budget = budgets.limit(vertex);
        // At most degree + 1 candidates are examined before one is admitted
        let chosen = (0..=budget).find(|&color| oracle::admits(graph, budgets, &coloring, vertex, color));
        match chosen {
            Some(color) => {
                trace!(vertex, color, "greedy assignment");
                coloring.set(vertex, Some(color));
            }
            None => {
                debug!(vertex, budget, "no admissible color, leaving vertex uncolored");
                unassigned.push(vertex);
            }
        }
    }
    unassigned.sort_unstable();

    let outcome = if oracle::is_solution(graph, budgets, &coloring) {
        Outcome::Solved(coloring.clone())
    } else {
        Outcome::NoSolution
    };
    debug!(
        vertices = graph.vertex_count(),
        uncolored = unassigned.len(),
        solved = outcome.is_solved(),
        "greedy pass finished"
    );

    Ok(GreedyRun {
        outcome,
        coloring,
        unassigned,
    })
}
