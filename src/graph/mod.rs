// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph model for μ-coloring.
//!
//! This module contains the pure data the solvers work on:
//! - Graph: symmetric adjacency sets over vertices `0..n`
//! - Budgets: the per-vertex maximum color index (μ)
//! - Coloring: a partial or total assignment of colors to vertices
//! - parse: text readers for adjacency, budget and coloring listings
//!
//! None of these types change during a solve.

pub mod budgets;
pub mod coloring;
pub mod parse;

pub use budgets::Budgets;
pub use coloring::Coloring;

use crate::error::{Error, Malformation, Result};
use std::collections::BTreeSet;
use std::ops::Range;

/// A vertex identifier in `0..n`.
pub type Vertex = usize;

/// A color index. Colors for vertex `v` are drawn from `0..=μ(v)`.
pub type Color = u32;

/// An undirected simple graph stored as adjacency sets.
///
/// Invariants (checked on construction):
/// - adjacency is symmetric
/// - no vertex is its own neighbor
/// - every neighbor id is in `0..n`
///
/// # Example
///
/// ```
/// use mu_coloring::graph::Graph;
///
/// let triangle = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
/// assert_eq!(triangle.edge_count(), 3);
/// assert_eq!(triangle.degree(1).unwrap(), 2);
/// assert!(triangle.neighbors(5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<BTreeSet<Vertex>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); vertex_count],
        }
    }

    /// Build a graph from an undirected edge list.
    ///
    /// Listing an edge twice (in either direction) names the same edge and
    /// stores it once. Self-loops and endpoints outside `0..vertex_count` are
    /// rejected; a dangling edge `(u, v)` is reported as given, with `u` as
    /// the vertex and `v` as the neighbor.
    pub fn from_edges(vertex_count: usize, edges: &[(Vertex, Vertex)]) -> Result<Self> {
        let mut graph = Self::empty(vertex_count);
        for &(u, v) in edges {
            if u >= vertex_count || v >= vertex_count {
                return Err(Malformation::DanglingReference {
                    vertex: u,
                    neighbor: v,
                }
                .into());
            }
            if u == v {
                return Err(Malformation::SelfLoop(u).into());
            }
            graph.adjacency[u].insert(v);
            graph.adjacency[v].insert(u);
        }
        Ok(graph)
    }

    /// Build a graph from per-vertex neighbor lists, where `lists[v]` holds the
    /// neighbors of `v`.
    ///
    /// Every edge must be listed from both ends. Asymmetric listings,
    /// repeated neighbors, self-loops and dangling references are rejected,
    /// never repaired.
    pub fn from_adjacency(lists: &[Vec<Vertex>]) -> Result<Self> {
        let vertex_count = lists.len();
        let mut adjacency = Vec::with_capacity(vertex_count);

        for (vertex, list) in lists.iter().enumerate() {
            let mut set = BTreeSet::new();
            for &neighbor in list {
                if neighbor >= vertex_count {
                    return Err(Malformation::DanglingReference { vertex, neighbor }.into());
                }
                if neighbor == vertex {
                    return Err(Malformation::SelfLoop(vertex).into());
                }
                if !set.insert(neighbor) {
                    return Err(Malformation::DuplicateNeighbor { vertex, neighbor }.into());
                }
            }
            adjacency.push(set);
        }

        for (vertex, set) in adjacency.iter().enumerate() {
            for &neighbor in set {
                if !adjacency[neighbor].contains(&vertex) {
                    return Err(Malformation::AsymmetricAdjacency { vertex, neighbor }.into());
                }
            }
        }

        Ok(Self { adjacency })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// All vertex ids, `0..n`.
    pub fn vertices(&self) -> Range<Vertex> {
        0..self.adjacency.len()
    }

    /// Whether `vertex` belongs to this graph.
    pub fn contains(&self, vertex: Vertex) -> bool {
        vertex < self.adjacency.len()
    }

    /// Neighbors of `vertex`.
    pub fn neighbors(&self, vertex: Vertex) -> Result<&BTreeSet<Vertex>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| self.unknown(vertex))
    }

    /// Number of neighbors of `vertex`.
    pub fn degree(&self, vertex: Vertex) -> Result<usize> {
        self.neighbors(vertex).map(BTreeSet::len)
    }

    /// Whether `u` and `v` share an edge. False if either is not in the graph.
    pub fn are_adjacent(&self, u: Vertex, v: Vertex) -> bool {
        self.adjacency.get(u).is_some_and(|set| set.contains(&v))
    }

    /// Each undirected edge once, as `(u, v)` with `u < v`, in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, set)| {
            set.range(u + 1..).map(move |&v| (u, v))
        })
    }

    /// Neighbor set of a vertex already known to be in range.
    pub(crate) fn adjacent(&self, vertex: Vertex) -> &BTreeSet<Vertex> {
        &self.adjacency[vertex]
    }

    pub(crate) fn unknown(&self, vertex: Vertex) -> Error {
        Error::UnknownVertex {
            vertex,
            vertex_count: self.vertex_count(),
        }
    }
}
