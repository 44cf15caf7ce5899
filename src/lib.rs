// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! μ-coloring: graph coloring with a separate color budget for every vertex.
//!
//! Given an undirected graph and, for each vertex `v`, a maximum color index
//! μ(v), find colors such that adjacent vertices differ and every vertex's
//! color lies in `0..=μ(v)`.
//!
//! # Architecture
//!
//! ## Problem data (immutable)
//!
//! - [`Graph`]: symmetric adjacency sets, validated on construction
//! - [`Budgets`]: one μ per vertex
//!
//! ## Search state (mutable, one per solve)
//!
//! - [`Coloring`]: partial or total assignment
//! - [`Trail`]: records coloring changes for O(1) backtracking
//! - [`SearchContext`]: the problem plus the state above
//!
//! Every constraint check goes through the [`oracle`]; neither solver has
//! its own notion of validity.
//!
//! # Solvers
//!
//! 1. **Greedy** ([`solver::solve_greedy`]): one pass in ascending-budget
//!    order, smallest admissible color, no backtracking. Fast, but its
//!    `NoSolution` is not a proof.
//! 2. **Exhaustive** ([`solver::solve_exhaustive`]): depth-first search on the
//!    predicate [`engine`]. Finds a coloring whenever one exists within the
//!    budgets and the optional ceiling.
//!
//! Outcomes are three-way ([`Outcome`]): solved, no solution, or unknown
//! when a ceiling or cutoff stopped the search early. A [`report::Report`]
//! renders each in words that respect which solver produced it.
//!
//! # Example
//!
//! ```
//! use mu_coloring::{solver, Budgets, Graph, Outcome};
//!
//! // The 4-cycle with every budget 1 is 2-colorable
//! let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let budgets = Budgets::uniform(&graph, 1);
//!
//! let outcome = solver::solve_exhaustive(&graph, &budgets, None).unwrap();
//! assert!(matches!(outcome, Outcome::Solved(ref c) if c.distinct_colors() == 2));
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod graph;
pub mod oracle;
pub mod outcome;
pub mod predicates;
pub mod report;
pub mod solver;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::{Error, Malformation, Result};
pub use graph::{Budgets, Color, Coloring, Graph, Vertex};
pub use outcome::{Outcome, UnknownReason};
pub use report::{Report, Verdict};
pub use solver::{SolverConfig, VertexOrder};
pub use trail::Trail;
