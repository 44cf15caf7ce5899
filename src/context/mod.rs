// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining the fixed problem and the mutable search state.
//!
//! The SearchContext is the data structure passed through every predicate:
//! - the problem (graph and budgets), borrowed and never modified
//! - the current partial coloring, changed only through the trail
//! - statistics and the cutoff consulted by the engine
//!
//! Because the problem is only borrowed, any number of contexts can search the
//! same graph at once, each with its own coloring and trail.

use crate::graph::{Budgets, Color, Coloring, Graph, Vertex};
use crate::oracle;
use crate::solver::cutoff::{Cutoff, NoCutoff};
use crate::state::{Counters, Statistics};
use crate::trail::Trail;

/// Search context for one run of the engine.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     graph, budgets,            // borrowed, immutable
///     coloring: Coloring,        // mutable, owned, restored by the trail
///     trail: Trail,              // mutable, owned
///     statistics: Statistics,    // mutable, owned, never rewound
///     cutoff: Box<dyn Cutoff>,   // consulted by the engine
/// }
/// ```
///
/// # Example
///
/// ```
/// use mu_coloring::context::SearchContext;
/// use mu_coloring::graph::{Budgets, Graph};
///
/// let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
/// let budgets = Budgets::uniform(&graph, 1);
/// let mut ctx = SearchContext::new(&graph, &budgets);
///
/// let checkpoint = ctx.trail.len();
/// assert!(ctx.admits(0, 0));
/// ctx.assign(0, 0);
/// assert!(!ctx.admits(1, 0));
/// ctx.rewind_to(checkpoint);
/// assert!(ctx.admits(1, 0));
/// ```
#[derive(Debug)]
pub struct SearchContext<'a> {
    /// The graph being colored
    pub graph: &'a Graph,
    /// Per-vertex budgets
    pub budgets: &'a Budgets,
    /// Current partial coloring
    pub coloring: Coloring,
    /// Trail for backtracking
    pub trail: Trail,
    /// Search counters
    pub statistics: Statistics,
    cutoff: Box<dyn Cutoff + 'a>,
}

impl<'a> SearchContext<'a> {
    /// Create a context with an empty coloring and no cutoff.
    pub fn new(graph: &'a Graph, budgets: &'a Budgets) -> Self {
        Self::with_cutoff(graph, budgets, NoCutoff)
    }

    /// Create a context whose search stops once `cutoff` is reached.
    pub fn with_cutoff(graph: &'a Graph, budgets: &'a Budgets, cutoff: impl Cutoff + 'a) -> Self {
        Self {
            graph,
            budgets,
            coloring: Coloring::for_graph(graph),
            trail: Trail::with_capacity(graph.vertex_count()),
            statistics: Statistics::new(),
            cutoff: Box::new(cutoff),
        }
    }

    /// Whether the oracle accepts `color` for `vertex` given the current coloring.
    pub fn admits(&self, vertex: Vertex, color: Color) -> bool {
        oracle::admits(self.graph, self.budgets, &self.coloring, vertex, color)
    }

    /// Assign a color with trail recording.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not in the graph.
    pub fn assign(&mut self, vertex: Vertex, color: Color) {
        self.trail.assign(&mut self.coloring, vertex, color);
    }

    /// Undo every coloring change made since `checkpoint` (a trail length).
    pub fn rewind_to(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.coloring);
    }

    /// Whether the current coloring is a complete solution.
    pub fn is_solution(&self) -> bool {
        oracle::is_solution(self.graph, self.budgets, &self.coloring)
    }

    /// Whether the caller's cutoff has been reached.
    pub fn cutoff_reached(&self) -> bool {
        self.cutoff.reached()
    }

    pub(crate) fn count(&mut self, counter: Counters) {
        self.statistics.increment_counter(counter);
    }
}
