// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive depth-first search.
//!
//! The search is a two-predicate program on the engine:
//!
//! ```text
//! AssignColor (one round per vertex, one choice per candidate color)
//! Suspend     (hand the complete coloring back)
//! ```
//!
//! Counting swaps `Suspend` for a counting predicate followed by `Fail`, which
//! drives the engine through every coloring without stopping.

use super::cutoff::{Cutoff, Deadline, NoCutoff};
use super::SolverConfig;
use crate::context::SearchContext;
use crate::engine::{EngineBuilder, SearchEngine, SearchStatus};
use crate::error::Result;
use crate::graph::{Budgets, Color, Coloring, Graph};
use crate::outcome::{Outcome, UnknownReason};
use crate::predicates::{AssignColorPredicate, FailPredicate, SuspendPredicate};
use crate::state::{Counters, Statistics};
use std::fmt;
use tracing::{debug, info};

/// Outcome of an exhaustive search together with its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhaustiveRun {
    pub outcome: Outcome,
    pub statistics: Statistics,
}

/// Find the first valid total coloring in ascending-budget order.
///
/// With a `ceiling`, colors above it are never tried. If that ceiling is
/// below the largest budget and nothing is found, the answer is
/// `Unknown(CeilingReached)` rather than `NoSolution`.
///
/// # Example
///
/// ```
/// use mu_coloring::graph::{Budgets, Graph};
/// use mu_coloring::outcome::{Outcome, UnknownReason};
/// use mu_coloring::solver::solve_exhaustive;
///
/// let triangle = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
/// let budgets = Budgets::uniform(&triangle, 2);
///
/// assert!(solve_exhaustive(&triangle, &budgets, None).unwrap().is_solved());
/// assert_eq!(
///     solve_exhaustive(&triangle, &budgets, Some(1)).unwrap(),
///     Outcome::Unknown(UnknownReason::CeilingReached { ceiling: 1 })
/// );
/// ```
pub fn solve_exhaustive(graph: &Graph, budgets: &Budgets, ceiling: Option<Color>) -> Result<Outcome> {
    let config = SolverConfig {
        ceiling,
        ..SolverConfig::default()
    };
    Ok(solve_exhaustive_with(graph, budgets, &config, &NoCutoff)?.outcome)
}

/// Exhaustive search with full configuration and an external cutoff.
///
/// The configured time limit, if any, is combined with `cutoff`; whichever
/// is reached first stops the search with `Unknown(Cancelled)`.
pub fn solve_exhaustive_with(
    graph: &Graph,
    budgets: &Budgets,
    config: &SolverConfig,
    cutoff: &dyn Cutoff,
) -> Result<ExhaustiveRun> {
    budgets.ensure_covers(graph)?;
    let order = config.order.resolve(graph, budgets)?;
    let deadline = config.time_limit.map(Deadline::after);
    let mut ctx = SearchContext::with_cutoff(graph, budgets, (deadline, cutoff));

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        ceiling = ?config.ceiling,
        "starting exhaustive search"
    );

    let engine = EngineBuilder::new()
        .add(Box::new(AssignColorPredicate::new(graph, budgets, order, config.ceiling)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let outcome = match engine.search(&mut ctx) {
        SearchStatus::Suspended(_) => {
            ctx.count(Counters::Solutions);
            debug_assert!(ctx.is_solution(), "search suspended on an invalid coloring");
            Outcome::Solved(ctx.coloring.clone())
        }
        SearchStatus::Exhausted => exhausted(budgets, config.ceiling),
        SearchStatus::Cancelled => Outcome::Unknown(UnknownReason::Cancelled),
    };

    info!(solved = outcome.is_solved(), statistics = %ctx.statistics, "exhaustive search finished");
    Ok(ExhaustiveRun {
        outcome,
        statistics: ctx.statistics,
    })
}

/// What an exhausted search means: a proof, unless the ceiling hid colors
/// some budget allows.
fn exhausted(budgets: &Budgets, ceiling: Option<Color>) -> Outcome {
    match (ceiling, budgets.max()) {
        (Some(ceiling), Some(max)) if ceiling < max => {
            Outcome::Unknown(UnknownReason::CeilingReached { ceiling })
        }
        _ => Outcome::NoSolution,
    }
}

/// The number of valid total colorings, or a lower bound if cut off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionCount {
    Exact(u64),
    AtLeast(u64),
}

impl SolutionCount {
    pub fn value(&self) -> u64 {
        match self {
            SolutionCount::Exact(n) | SolutionCount::AtLeast(n) => *n,
        }
    }
}

impl fmt::Display for SolutionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolutionCount::Exact(n) => write!(f, "{}", n),
            SolutionCount::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Count every valid total coloring using colors up to the ceiling.
///
/// Distinct colorings are counted, so interchangeable colors are not pruned.
pub fn count_solutions(
    graph: &Graph,
    budgets: &Budgets,
    config: &SolverConfig,
    cutoff: &dyn Cutoff,
) -> Result<SolutionCount> {
    budgets.ensure_covers(graph)?;
    let order = config.order.resolve(graph, budgets)?;
    let deadline = config.time_limit.map(Deadline::after);
    let mut ctx = SearchContext::with_cutoff(graph, budgets, (deadline, cutoff));

    let engine = EngineBuilder::new()
        .add(Box::new(AssignColorPredicate::enumerating(graph, budgets, order, config.ceiling)))
        .add(Statistics::counting_predicate(Counters::Solutions, None))
        .terminal(Box::new(FailPredicate))
        .build();

    let status = engine.search(&mut ctx);
    let found = ctx.statistics.get(Counters::Solutions);
    let count = match status {
        SearchStatus::Exhausted => SolutionCount::Exact(found),
        SearchStatus::Cancelled | SearchStatus::Suspended(_) => SolutionCount::AtLeast(found),
    };
    info!(%count, statistics = %ctx.statistics, "solution count finished");
    Ok(count)
}

/// Every valid total coloring, in search order.
///
/// Each call to `next` resumes the suspended engine where the previous
/// solution left it.
///
/// # Example
///
/// ```
/// use mu_coloring::graph::{Budgets, Graph};
/// use mu_coloring::solver::{solutions, NoCutoff, SolverConfig};
///
/// let edge = Graph::from_edges(2, &[(0, 1)]).unwrap();
/// let budgets = Budgets::uniform(&edge, 1);
/// let all: Vec<_> = solutions(&edge, &budgets, &SolverConfig::default(), &NoCutoff)
///     .unwrap()
///     .collect();
/// assert_eq!(all.len(), 2);
/// ```
#[derive(Debug)]
pub struct Solutions<'a> {
    ctx: SearchContext<'a>,
    engine: Option<SearchEngine>,
    cancelled: bool,
}

impl Solutions<'_> {
    /// Whether iteration ended because the cutoff was reached.
    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Counters accumulated over every solution produced so far.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }
}

/// Iterate over every valid total coloring.
pub fn solutions<'a>(
    graph: &'a Graph,
    budgets: &'a Budgets,
    config: &SolverConfig,
    cutoff: &'a dyn Cutoff,
) -> Result<Solutions<'a>> {
    budgets.ensure_covers(graph)?;
    let order = config.order.resolve(graph, budgets)?;
    let deadline = config.time_limit.map(Deadline::after);
    let ctx = SearchContext::with_cutoff(graph, budgets, (deadline, cutoff));

    let engine = EngineBuilder::new()
        .add(Box::new(AssignColorPredicate::enumerating(graph, budgets, order, config.ceiling)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    Ok(Solutions {
        ctx,
        engine: Some(engine),
        cancelled: false,
    })
}

impl Iterator for Solutions<'_> {
    type Item = Coloring;

    fn next(&mut self) -> Option<Coloring> {
        let engine = self.engine.take()?;
        match engine.search(&mut self.ctx) {
            SearchStatus::Suspended(engine) => {
                self.engine = Some(engine);
                self.ctx.count(Counters::Solutions);
                Some(self.ctx.coloring.clone())
            }
            SearchStatus::Exhausted => None,
            SearchStatus::Cancelled => {
                self.cancelled = true;
                None
            }
        }
    }
}
