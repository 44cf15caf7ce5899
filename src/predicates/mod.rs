// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the coloring search.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `assign`: AssignColorPredicate, one round per vertex
//! - `test`: Simple predicates for exercising the engine
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod assign;
pub mod test;

pub use assign::AssignColorPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Placed at the end of a
/// program it drives the engine through every alternative, for example to
/// count all colorings with a counting predicate in front of it.
///
/// # Example
///
/// ```
/// use mu_coloring::context::SearchContext;
/// use mu_coloring::engine::{EngineBuilder, SearchStatus};
/// use mu_coloring::graph::{Budgets, Graph};
/// use mu_coloring::predicates::test::ChoicePredicate;
/// use mu_coloring::predicates::FailPredicate;
///
/// let graph = Graph::empty(1);
/// let budgets = Budgets::uniform(&graph, 0);
/// let mut ctx = SearchContext::new(&graph, &budgets);
/// let engine = EngineBuilder::new()
///     .add(Box::new(ChoicePredicate::new(vec![1, 2, 3])))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all choices then fail
/// assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted));
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Hands control back to the caller with the context as it stands, typically
/// holding a complete coloring. Resuming the engine continues as though this
/// predicate had failed.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
