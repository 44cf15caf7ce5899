// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Deadlines and cancellation stop the exhaustive search with `Unknown`.

mod common;

use mu_coloring::report::Verdict;
use mu_coloring::solver::{
    count_solutions, solutions, solve_both, solve_exhaustive_with, CancellationToken, Deadline,
    NoCutoff, SolutionCount, SolverConfig,
};
use mu_coloring::state::Counters;
use mu_coloring::{Outcome, UnknownReason};
use std::thread;
use std::time::{Duration, Instant};

#[test]
fn test_cancel_from_another_thread() {
    let (graph, budgets) = common::pigeonhole(12);
    let token = CancellationToken::new();
    let handle = token.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        handle.cancel();
    });

    let run = solve_exhaustive_with(&graph, &budgets, &SolverConfig::default(), &token).unwrap();
    canceller.join().unwrap();

    assert_eq!(run.outcome, Outcome::Unknown(UnknownReason::Cancelled));
    assert!(run.statistics.get(Counters::Tries) > 0);
}

#[test]
fn test_time_limit() {
    let (graph, budgets) = common::pigeonhole(12);
    let config = SolverConfig::new().with_time_limit(Duration::from_millis(20));
    let start = Instant::now();
    let run = solve_exhaustive_with(&graph, &budgets, &config, &NoCutoff).unwrap();

    assert_eq!(run.outcome, Outcome::Unknown(UnknownReason::Cancelled));
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[test]
fn test_deadline_as_cutoff() {
    let (graph, budgets) = common::pigeonhole(12);
    let deadline = Deadline::after(Duration::from_millis(20));
    let run = solve_exhaustive_with(&graph, &budgets, &SolverConfig::default(), &deadline).unwrap();
    assert_eq!(run.outcome, Outcome::Unknown(UnknownReason::Cancelled));
}

#[test]
fn test_cut_off_count_is_a_lower_bound() {
    let graph = common::complete(12);
    let budgets = mu_coloring::Budgets::uniform(&graph, 11);
    let config = SolverConfig::new().with_time_limit(Duration::from_millis(20));
    let count = count_solutions(&graph, &budgets, &config, &NoCutoff).unwrap();
    // 12! colorings exist; far more than can be counted in the limit
    assert!(matches!(count, SolutionCount::AtLeast(n) if n < 479_001_600));
}

#[test]
fn test_solutions_iterator_reports_cancellation() {
    let (graph, budgets) = common::pigeonhole(12);
    let config = SolverConfig::new().with_time_limit(Duration::from_millis(20));
    let mut iter = solutions(&graph, &budgets, &config, &NoCutoff).unwrap();
    assert_eq!(iter.next(), None);
    assert!(iter.was_cancelled());
}

#[test]
fn test_cancellation_does_not_affect_greedy() {
    let (graph, budgets) = common::pigeonhole(6);
    let token = CancellationToken::new();
    token.cancel();
    let (greedy, exhaustive) = solve_both(&graph, &budgets, &SolverConfig::default(), &token).unwrap();

    assert_eq!(greedy.verdict(), Verdict::HeuristicFailure);
    assert_eq!(exhaustive.verdict(), Verdict::Incomplete(UnknownReason::Cancelled));
    assert!(exhaustive.to_string().contains("search incomplete"));
}
