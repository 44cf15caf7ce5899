// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for graph construction and solver input validation.
//!
//! Solver outcomes such as "no solution" are not errors; see
//! [`Outcome`](crate::outcome::Outcome).

use crate::graph::Vertex;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the coloring core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A structural invariant of the graph or its budgets was violated on construction.
    #[error("malformed graph: {0}")]
    MalformedGraph(#[from] Malformation),

    /// A query named a vertex that is not in the graph.
    #[error("unknown vertex {vertex} (graph has {vertex_count} vertices)")]
    UnknownVertex { vertex: Vertex, vertex_count: usize },

    /// A caller-supplied vertex order is not a permutation of the graph's vertices.
    #[error("invalid vertex order: {reason}")]
    InvalidOrder { reason: String },
}

/// The specific defect behind an [`Error::MalformedGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformation {
    #[error("line {line}: cannot parse '{token}' as an integer")]
    UnparsableToken { line: usize, token: String },

    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("line {line}: negative vertex id {id}")]
    NegativeId { line: usize, id: i64 },

    #[error("edge {vertex}-{neighbor} references a vertex outside the graph")]
    DanglingReference { vertex: Vertex, neighbor: Vertex },

    #[error("vertex {0} is adjacent to itself")]
    SelfLoop(Vertex),

    #[error("vertex {vertex} lists neighbor {neighbor} more than once")]
    DuplicateNeighbor { vertex: Vertex, neighbor: Vertex },

    #[error("vertex {0} is defined more than once")]
    DuplicateVertex(Vertex),

    #[error("vertex {0} is missing from the id range")]
    MissingVertex(Vertex),

    #[error("vertex {vertex} lists {neighbor} as a neighbor but {neighbor} does not list {vertex}")]
    AsymmetricAdjacency { vertex: Vertex, neighbor: Vertex },

    #[error("vertex {vertex} has negative budget {budget}")]
    NegativeBudget { vertex: Vertex, budget: i64 },

    #[error("vertex {vertex} has budget {budget}, which exceeds the largest color index")]
    BudgetOutOfRange { vertex: Vertex, budget: i64 },

    #[error("vertex {0} has no budget")]
    MissingBudget(Vertex),

    #[error("expected {expected} budgets, found {found}")]
    BudgetCountMismatch { expected: usize, found: usize },
}
