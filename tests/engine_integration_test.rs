// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine.
//!
//! These tests validate that the engine correctly:
//! - Runs coloring predicates in sequence
//! - Handles Choices and retry_pred correctly
//! - Backtracks on failure and restores the coloring via the trail
//! - Resumes a suspended search to reach later solutions

mod common;

use mu_coloring::context::SearchContext;
use mu_coloring::engine::{EngineBuilder, SearchStatus};
use mu_coloring::graph::{Budgets, Coloring, Graph};
use mu_coloring::predicates::test::{ChoicePredicate, FixedColorPredicate};
use mu_coloring::predicates::{AssignColorPredicate, FailPredicate, SuspendPredicate};
use mu_coloring::state::{Counters, Statistics};

fn edge() -> (Graph, Budgets) {
    let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
    let budgets = Budgets::uniform(&graph, 1);
    (graph, budgets)
}

#[test]
fn test_edge_coloring_with_suspend() {
    let (graph, budgets) = edge();
    let mut ctx = SearchContext::new(&graph, &budgets);
    let engine = EngineBuilder::new()
        .add(Box::new(AssignColorPredicate::new(&graph, &budgets, vec![0, 1], None)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let SearchStatus::Suspended(engine) = engine.search(&mut ctx) else {
        panic!("an edge with budgets 1 is colorable");
    };
    assert_eq!(ctx.coloring, Coloring::total(&[0, 1]));

    let (tries, retries) = engine.statistics();
    assert_eq!(tries, 4); // rounds 0, 1, 2 of AssignColor + Suspend
    assert_eq!(retries, 3); // vertex 0: color 0; vertex 1: colors 0, 1
    assert_eq!(ctx.statistics.get(Counters::Rejections), 1);
}

#[test]
fn test_resume_finds_next_solution() {
    let (graph, budgets) = edge();
    let mut ctx = SearchContext::new(&graph, &budgets);
    let engine = EngineBuilder::new()
        .add(Box::new(AssignColorPredicate::new(&graph, &budgets, vec![0, 1], None)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let SearchStatus::Suspended(engine) = engine.search(&mut ctx) else {
        panic!("expected first solution");
    };
    assert_eq!(ctx.coloring, Coloring::total(&[0, 1]));

    let SearchStatus::Suspended(engine) = engine.search(&mut ctx) else {
        panic!("expected second solution");
    };
    assert_eq!(ctx.coloring, Coloring::total(&[1, 0]));
    assert_eq!(engine.statistics(), (7, 5));

    assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted));
}

#[test]
fn test_exhaustion_restores_coloring() {
    let graph = common::triangle();
    let budgets = Budgets::uniform(&graph, 1);
    let mut ctx = SearchContext::new(&graph, &budgets);
    let engine = EngineBuilder::new()
        .add(Box::new(AssignColorPredicate::new(&graph, &budgets, vec![0, 1, 2], None)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted));
    assert_eq!(ctx.coloring.assigned_count(), 0);
    assert!(ctx.trail.is_empty());
    assert!(ctx.statistics.get(Counters::Backtracks) > 0);
}

#[test]
fn test_pinned_vertex_is_respected() {
    let (graph, budgets) = edge();
    let mut ctx = SearchContext::new(&graph, &budgets);
    let engine = EngineBuilder::new()
        .add(Box::new(FixedColorPredicate::new(0, 1)))
        .add(Box::new(AssignColorPredicate::new(&graph, &budgets, vec![0, 1], None)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    assert!(matches!(engine.search(&mut ctx), SearchStatus::Suspended(_)));
    assert_eq!(ctx.coloring, Coloring::total(&[1, 0]));
}

#[test]
fn test_choices_before_coloring_are_retried() {
    // Each choice of the first predicate reruns the whole coloring search
    let graph = common::cycle(4);
    let budgets = Budgets::uniform(&graph, 1);
    let mut ctx = SearchContext::new(&graph, &budgets);
    let engine = EngineBuilder::new()
        .add(Box::new(ChoicePredicate::new(vec!["X", "Y", "Z"])))
        .add(Box::new(AssignColorPredicate::enumerating(&graph, &budgets, vec![0, 1, 2, 3], None)))
        .add(Statistics::counting_predicate(Counters::Solutions, None))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted));
    assert_eq!(ctx.statistics.get(Counters::Solutions), 6); // 3 choices * 2 colorings
}

fn first_vertex_is_zero(ctx: &SearchContext<'_>) -> bool {
    ctx.coloring.get(0) == Some(0)
}

#[test]
fn test_filtered_counting_predicate() {
    let graph = common::cycle(4);
    let budgets = Budgets::uniform(&graph, 1);
    let mut ctx = SearchContext::new(&graph, &budgets);
    let filter = first_vertex_is_zero as fn(&SearchContext<'_>) -> bool;
    let engine = EngineBuilder::new()
        .add(Box::new(AssignColorPredicate::enumerating(&graph, &budgets, vec![0, 1, 2, 3], None)))
        .add(Statistics::counting_predicate(Counters::Solutions, Some(filter)))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted));
    assert_eq!(ctx.statistics.get(Counters::Solutions), 1);
}

#[test]
fn test_empty_graph_suspends_immediately() {
    let graph = Graph::empty(0);
    let budgets = Budgets::uniform(&graph, 0);
    let mut ctx = SearchContext::new(&graph, &budgets);
    let engine = EngineBuilder::new()
        .add(Box::new(AssignColorPredicate::new(&graph, &budgets, vec![], None)))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let SearchStatus::Suspended(engine) = engine.search(&mut ctx) else {
        panic!("the empty coloring is a solution");
    };
    assert!(ctx.is_solution());
    assert_eq!(engine.statistics(), (2, 0));
}
