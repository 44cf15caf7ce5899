// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two coloring strategies and their shared configuration.
//!
//! - [`greedy`]: one pass, smallest admissible color per vertex, no backtracking
//! - [`exhaustive`]: depth-first backtracking on the predicate engine
//! - [`cutoff`]: deadlines and cancellation for long searches
//!
//! Both solvers pick candidates only through [`oracle::admits`](crate::oracle::admits)
//! and borrow the graph and budgets immutably, so they can run side by side
//! (see [`solve_both`]).

pub mod cutoff;
pub mod exhaustive;
pub mod greedy;

pub use cutoff::{CancellationToken, Cutoff, Deadline, NoCutoff};
pub use exhaustive::{
    count_solutions, solutions, solve_exhaustive, solve_exhaustive_with, ExhaustiveRun,
    SolutionCount, Solutions,
};
pub use greedy::{run_greedy, solve_greedy, solve_greedy_in_order, GreedyRun};

use crate::error::{Error, Result};
use crate::graph::{Budgets, Color, Graph, Vertex};
use crate::report::Report;
use std::time::{Duration, Instant};
use tracing::debug;

/// The order in which a solver visits vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VertexOrder {
    /// Ascending budget, ties broken by ascending id.
    #[default]
    AscendingBudget,

    /// A caller-chosen permutation of the graph's vertices.
    Explicit(Vec<Vertex>),
}

impl VertexOrder {
    /// The concrete visiting order for this graph.
    ///
    /// Fails with [`Error::InvalidOrder`] if an explicit order is not a
    /// permutation of the graph's vertices.
    pub fn resolve(&self, graph: &Graph, budgets: &Budgets) -> Result<Vec<Vertex>> {
        match self {
            VertexOrder::AscendingBudget => {
                let mut order: Vec<Vertex> = graph.vertices().collect();
                // Stable, so equal budgets keep ascending id
                order.sort_by_key(|&vertex| budgets.limit(vertex));
                Ok(order)
            }
            VertexOrder::Explicit(order) => {
                check_permutation(graph, order)?;
                Ok(order.clone())
            }
        }
    }
}

fn check_permutation(graph: &Graph, order: &[Vertex]) -> Result<()> {
    let n = graph.vertex_count();
    if order.len() != n {
        return Err(Error::InvalidOrder {
            reason: format!("expected {} vertices, found {}", n, order.len()),
        });
    }
    let mut seen = vec![false; n];
    for &vertex in order {
        if vertex >= n {
            return Err(Error::InvalidOrder {
                reason: format!("vertex {} is not in the graph", vertex),
            });
        }
        if std::mem::replace(&mut seen[vertex], true) {
            return Err(Error::InvalidOrder {
                reason: format!("vertex {} appears more than once", vertex),
            });
        }
    }
    Ok(())
}

/// Solver settings.
///
/// # Example
///
/// ```
/// use mu_coloring::solver::{SolverConfig, VertexOrder};
/// use std::time::Duration;
///
/// let config = SolverConfig::new()
///     .with_ceiling(3)
///     .with_order(VertexOrder::Explicit(vec![2, 0, 1]))
///     .with_time_limit(Duration::from_secs(5));
/// assert_eq!(config.ceiling, Some(3));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Largest color the exhaustive search may use. `None` leaves the budgets
    /// as the only bound.
    pub ceiling: Option<Color>,

    /// Vertex visiting order for both solvers.
    pub order: VertexOrder,

    /// Wall-clock limit for the exhaustive search.
    pub time_limit: Option<Duration>,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ceiling(mut self, ceiling: Color) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    pub fn with_order(mut self, order: VertexOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// Run the greedy solver and time it.
pub fn greedy_report(graph: &Graph, budgets: &Budgets, config: &SolverConfig) -> Result<Report> {
    let start = Instant::now();
    let run = run_greedy(graph, budgets, &config.order)?;
    Ok(Report::from_greedy(run, start.elapsed()))
}

/// Run the exhaustive solver and time it.
pub fn exhaustive_report(
    graph: &Graph,
    budgets: &Budgets,
    config: &SolverConfig,
    cutoff: &dyn Cutoff,
) -> Result<Report> {
    let start = Instant::now();
    let run = solve_exhaustive_with(graph, budgets, config, cutoff)?;
    Ok(Report::from_exhaustive(run, start.elapsed()))
}

/// Run both solvers concurrently on the same problem.
///
/// Returns the greedy report first. The cutoff only applies to the
/// exhaustive search; greedy always finishes in one pass.
pub fn solve_both(
    graph: &Graph,
    budgets: &Budgets,
    config: &SolverConfig,
    cutoff: &dyn Cutoff,
) -> Result<(Report, Report)> {
    debug!(vertices = graph.vertex_count(), "running greedy and exhaustive solvers");
    let (greedy, exhaustive) = rayon::join(
        || greedy_report(graph, budgets, config),
        || exhaustive_report(graph, budgets, config, cutoff),
    );
    Ok((greedy?, exhaustive?))
}
