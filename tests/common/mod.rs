// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use mu_coloring::graph::{Budgets, Color, Coloring, Graph};
use mu_coloring::oracle;

/// Triangle 0-1-2.
pub fn triangle() -> Graph {
    Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap()
}

/// Star with center 0 and `leaves` leaves 1..=leaves.
pub fn star(leaves: usize) -> Graph {
    let edges: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    Graph::from_edges(leaves + 1, &edges).unwrap()
}

/// Cycle 0-1-...-(n-1)-0.
pub fn cycle(n: usize) -> Graph {
    let edges: Vec<_> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    Graph::from_edges(n, &edges).unwrap()
}

/// Complete graph on `n` vertices.
pub fn complete(n: usize) -> Graph {
    let edges: Vec<_> = (0..n)
        .flat_map(|u| (u + 1..n).map(move |v| (u, v)))
        .collect();
    Graph::from_edges(n, &edges).unwrap()
}

/// Path 0-2-3-1 with every budget 1.
///
/// Greedy in id order colors 0 and 1 with color 0 before reaching 2 and 3,
/// which leaves 3 with both colors taken. The graph is bipartite, so a
/// coloring exists.
pub fn greedy_trap() -> (Graph, Budgets) {
    let graph = Graph::from_edges(4, &[(0, 2), (2, 3), (3, 1)]).unwrap();
    let budgets = Budgets::uniform(&graph, 1);
    (graph, budgets)
}

/// `n + 1` mutually adjacent vertices with only `n` colors: uncolorable, and
/// exponentially slow to prove so.
pub fn pigeonhole(n: usize) -> (Graph, Budgets) {
    let graph = complete(n + 1);
    let budgets = Budgets::uniform(&graph, (n - 1) as Color);
    (graph, budgets)
}

/// Every valid total coloring, by enumerating the whole product of budgets.
pub fn brute_force_solutions(graph: &Graph, budgets: &Budgets) -> Vec<Coloring> {
    let n = graph.vertex_count();
    let limits: Vec<Color> = budgets.iter().map(|(_, limit)| limit).collect();
    let mut colors = vec![0; n];
    let mut found = Vec::new();
    loop {
        let coloring = Coloring::total(&colors);
        if oracle::is_valid(graph, budgets, &coloring) {
            found.push(coloring);
        }
        // Odometer increment
        let mut i = 0;
        loop {
            if i == n {
                return found;
            }
            if colors[i] < limits[i] {
                colors[i] += 1;
                break;
            }
            colors[i] = 0;
            i += 1;
        }
    }
}
