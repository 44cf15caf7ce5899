// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-vertex color budgets (μ).

use super::{Color, Graph, Vertex};
use crate::error::{Error, Malformation, Result};
use std::collections::BTreeMap;

/// The inclusive upper bound on each vertex's color index.
///
/// Vertex `v` may take any color in `0..=budgets[v]`, so a budget of 0 admits
/// only color 0. There is exactly one budget per vertex of the graph the
/// budgets were built for.
///
/// # Example
///
/// ```
/// use mu_coloring::graph::{Budgets, Graph};
///
/// let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
/// let budgets = Budgets::from_signed(&graph, &[0, 3]).unwrap();
/// assert_eq!(budgets.get(1).unwrap(), 3);
/// assert_eq!(budgets.max(), Some(3));
/// assert!(Budgets::from_signed(&graph, &[0, -1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budgets {
    limits: Vec<Color>,
}

impl Budgets {
    /// Budgets for `graph`, one per vertex in id order.
    pub fn new(graph: &Graph, limits: Vec<Color>) -> Result<Self> {
        if limits.len() != graph.vertex_count() {
            return Err(Malformation::BudgetCountMismatch {
                expected: graph.vertex_count(),
                found: limits.len(),
            }
            .into());
        }
        Ok(Self { limits })
    }

    /// The same budget for every vertex.
    pub fn uniform(graph: &Graph, limit: Color) -> Self {
        Self {
            limits: vec![limit; graph.vertex_count()],
        }
    }

    /// Budgets from signed input, rejecting negative values.
    pub fn from_signed(graph: &Graph, limits: &[i64]) -> Result<Self> {
        let limits = limits
            .iter()
            .enumerate()
            .map(|(vertex, &budget)| checked_budget(vertex, budget))
            .collect::<Result<Vec<_>>>()?;
        Self::new(graph, limits)
    }

    /// Budgets from a vertex → budget map that must cover every vertex exactly.
    pub fn from_map(graph: &Graph, map: &BTreeMap<Vertex, i64>) -> Result<Self> {
        if let Some(&vertex) = map.keys().find(|&&v| !graph.contains(v)) {
            return Err(graph.unknown(vertex));
        }
        let limits = graph
            .vertices()
            .map(|vertex| match map.get(&vertex) {
                Some(&budget) => checked_budget(vertex, budget),
                None => Err(Malformation::MissingBudget(vertex).into()),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { limits })
    }

    /// Budget of `vertex`.
    pub fn get(&self, vertex: Vertex) -> Result<Color> {
        self.limits
            .get(vertex)
            .copied()
            .ok_or(Error::UnknownVertex {
                vertex,
                vertex_count: self.limits.len(),
            })
    }

    /// The largest budget, or `None` for an empty graph.
    pub fn max(&self) -> Option<Color> {
        self.limits.iter().copied().max()
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.limits.len()
    }

    /// Whether there are no budgets (the graph is empty).
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// `(vertex, budget)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Color)> + '_ {
        self.limits.iter().copied().enumerate()
    }

    /// Check that these budgets were built for a graph of this size.
    pub(crate) fn ensure_covers(&self, graph: &Graph) -> Result<()> {
        if self.limits.len() != graph.vertex_count() {
            return Err(Malformation::BudgetCountMismatch {
                expected: graph.vertex_count(),
                found: self.limits.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Budget of a vertex already known to be in range.
    pub(crate) fn limit(&self, vertex: Vertex) -> Color {
        self.limits[vertex]
    }
}

fn checked_budget(vertex: Vertex, budget: i64) -> Result<Color> {
    if budget < 0 {
        return Err(Malformation::NegativeBudget { vertex, budget }.into());
    }
    Color::try_from(budget).map_err(|_| Malformation::BudgetOutOfRange { vertex, budget }.into())
}
