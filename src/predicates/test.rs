// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Test predicates for validating the search engine.
//!
//! These predicates are small examples that exercise the engine without a
//! full coloring search. They're useful for:
//! - Testing the engine's backtracking logic
//! - Validating trail integration
//! - Pinning vertices before a search, to explore part of the space

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::graph::{Color, Vertex};

/// Predicate that tries a fixed list of choices using the Choices model.
///
/// Leaves the context untouched; only the engine's control flow is exercised.
#[derive(Debug)]
pub struct ChoicePredicate<T: Clone> {
    options: Vec<T>,
}

impl<T: Clone> ChoicePredicate<T> {
    /// Create a new ChoicePredicate with the given options.
    pub fn new(options: Vec<T>) -> Self {
        Self { options }
    }
}

impl<T: Clone + std::fmt::Debug> Predicate for ChoicePredicate<T> {
    fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        if self.options.is_empty() {
            PredicateResult::Failure
        } else {
            PredicateResult::Choices(self.options.len())
        }
    }

    fn retry_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize, choice: usize) -> PredicateResult {
        if choice < self.options.len() {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Choice"
    }
}

/// Predicate that succeeds N times using SuccessSamePredicate (for testing rounds).
///
/// - Round 0, 1, ..., N-2: return SuccessSamePredicate
/// - Round N-1: return Success to advance
#[derive(Debug)]
pub struct MultiRoundPredicate {
    rounds: usize,
}

impl MultiRoundPredicate {
    /// Create a predicate that executes for `rounds` rounds.
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }
}

impl Predicate for MultiRoundPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, round: usize) -> PredicateResult {
        if round + 1 < self.rounds {
            PredicateResult::SuccessSamePredicate
        } else if round + 1 == self.rounds {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "MultiRound"
    }
}

/// Predicate that pins one vertex to a color before the search proper.
///
/// Fails if the oracle rejects the color. The assignment is trail-recorded,
/// so backtracking past this predicate unpins the vertex.
#[derive(Debug)]
pub struct FixedColorPredicate {
    vertex: Vertex,
    color: Color,
}

impl FixedColorPredicate {
    pub fn new(vertex: Vertex, color: Color) -> Self {
        Self { vertex, color }
    }
}

impl Predicate for FixedColorPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        if !ctx.graph.contains(self.vertex) || !ctx.admits(self.vertex, self.color) {
            return PredicateResult::Failure;
        }
        ctx.assign(self.vertex, self.color);
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "FixedColor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Budgets, Graph};

    fn problem() -> (Graph, Budgets) {
        let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
        let budgets = Budgets::uniform(&graph, 1);
        (graph, budgets)
    }

    #[test]
    fn test_choice_predicate() {
        let (graph, budgets) = problem();
        let mut ctx = SearchContext::new(&graph, &budgets);
        let mut pred = ChoicePredicate::new(vec!["A", "B", "C"]);

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Choices(3));
        assert_eq!(pred.retry_pred(&mut ctx, 0, 0), PredicateResult::Success);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 2), PredicateResult::Success);
        assert_eq!(pred.retry_pred(&mut ctx, 0, 3), PredicateResult::Failure);
    }

    #[test]
    fn test_empty_choice_predicate() {
        let (graph, budgets) = problem();
        let mut ctx = SearchContext::new(&graph, &budgets);
        let mut pred: ChoicePredicate<i32> = ChoicePredicate::new(vec![]);

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::Failure);
    }

    #[test]
    fn test_multi_round_predicate() {
        let (graph, budgets) = problem();
        let mut ctx = SearchContext::new(&graph, &budgets);
        let mut pred = MultiRoundPredicate::new(3);

        assert_eq!(pred.try_pred(&mut ctx, 0), PredicateResult::SuccessSamePredicate);
        assert_eq!(pred.try_pred(&mut ctx, 1), PredicateResult::SuccessSamePredicate);
        assert_eq!(pred.try_pred(&mut ctx, 2), PredicateResult::Success);
        assert_eq!(pred.try_pred(&mut ctx, 3), PredicateResult::Failure);
    }

    #[test]
    fn test_fixed_color_predicate() {
        let (graph, budgets) = problem();
        let mut ctx = SearchContext::new(&graph, &budgets);

        assert_eq!(
            FixedColorPredicate::new(0, 1).try_pred(&mut ctx, 0),
            PredicateResult::Success
        );
        assert_eq!(ctx.coloring.get(0), Some(1));

        // Conflicts with vertex 0, over budget, and not in the graph
        assert_eq!(FixedColorPredicate::new(1, 1).try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(FixedColorPredicate::new(1, 2).try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(FixedColorPredicate::new(9, 0).try_pred(&mut ctx, 0), PredicateResult::Failure);
    }
}
