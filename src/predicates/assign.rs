// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! AssignColorPredicate - colors vertices one per round.
//!
//! This predicate runs for one round per vertex in its order, choosing a color
//! for that vertex. On the round after the last vertex it succeeds, leaving a
//! total coloring in the context.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::graph::{Budgets, Color, Graph, Vertex};
use crate::state::Counters;
use tracing::trace;

/// AssignColorPredicate finds a color for each vertex in a fixed order.
///
/// # Choices
///
/// For the vertex of round `r`, choice `c` is the color `c`, tried in
/// ascending order from 0 up to the vertex's limit:
/// - the vertex's budget
/// - capped by the ceiling, if any
/// - capped at one more than the largest neighbor budget, when pruning
///
/// Colors above every neighbor's budget can never conflict, so they are
/// interchangeable and only the first of them is tried. Enumeration turns
/// this off to see every distinct coloring.
///
/// Each choice is accepted only if the oracle admits it against the
/// already-colored neighbors; the assignment is trail-recorded and undone on
/// backtrack.
#[derive(Debug)]
pub struct AssignColorPredicate {
    /// Vertices in the order they are colored, one per round.
    order: Vec<Vertex>,

    /// Largest color tried for the vertex of each round.
    limits: Vec<Color>,
}

impl AssignColorPredicate {
    /// A predicate that prunes interchangeable colors.
    pub fn new(graph: &Graph, budgets: &Budgets, order: Vec<Vertex>, ceiling: Option<Color>) -> Self {
        let limits = color_limits(graph, budgets, &order, ceiling, true);
        Self { order, limits }
    }

    /// A predicate that tries every color up to the budget (and ceiling), so
    /// distinct colorings are all reached.
    pub fn enumerating(
        graph: &Graph,
        budgets: &Budgets,
        order: Vec<Vertex>,
        ceiling: Option<Color>,
    ) -> Self {
        let limits = color_limits(graph, budgets, &order, ceiling, false);
        Self { order, limits }
    }

    /// The vertex colored in `round`, if any.
    pub fn vertex_at(&self, round: usize) -> Option<Vertex> {
        self.order.get(round).copied()
    }
}

fn color_limits(
    graph: &Graph,
    budgets: &Budgets,
    order: &[Vertex],
    ceiling: Option<Color>,
    prune: bool,
) -> Vec<Color> {
    order
        .iter()
        .map(|&vertex| {
            let mut limit = budgets.limit(vertex);
            if let Some(ceiling) = ceiling {
                limit = limit.min(ceiling);
            }
            if prune {
                let free = graph
                    .adjacent(vertex)
                    .iter()
                    .map(|&neighbor| budgets.limit(neighbor).saturating_add(1))
                    .max()
                    .unwrap_or(0);
                limit = limit.min(free);
            }
            limit
        })
        .collect()
}

impl Predicate for AssignColorPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, round: usize) -> PredicateResult {
        let Some(vertex) = self.vertex_at(round) else {
            // Every vertex in the order has a color
            return PredicateResult::Success;
        };

        if ctx.coloring.get(vertex).is_some() {
            // Pre-assigned by an earlier predicate
            return PredicateResult::SuccessSamePredicate;
        }

        PredicateResult::Choices(choice_count(self.limits[round]))
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext<'_>,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        let vertex = self.order[round];
        let Ok(color) = Color::try_from(choice) else {
            return PredicateResult::Failure;
        };

        if !ctx.admits(vertex, color) {
            ctx.count(Counters::Rejections);
            return PredicateResult::Failure;
        }

        trace!(vertex, color, round, "assigned");
        ctx.assign(vertex, color);
        ctx.count(Counters::Assignments);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "AssignColor"
    }
}

/// Colors `0..=limit`, saturating where `usize` is narrower than `Color`.
fn choice_count(limit: Color) -> usize {
    usize::try_from(limit).map_or(usize::MAX, |n| n.saturating_add(1))
}
