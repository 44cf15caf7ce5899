// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to restore the coloring
//! automatically on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! The execution model is WAM-like:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! Before each step the engine consults the context's cutoff and stops with
//! [`SearchStatus::Cancelled`] once it is reached.
//!
//! # Example
//!
//! ```
//! use mu_coloring::context::SearchContext;
//! use mu_coloring::engine::{EngineBuilder, SearchStatus};
//! use mu_coloring::graph::{Budgets, Graph};
//! use mu_coloring::predicates::{AssignColorPredicate, SuspendPredicate};
//!
//! let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
//! let budgets = Budgets::uniform(&graph, 1);
//! let mut ctx = SearchContext::new(&graph, &budgets);
//!
//! let engine = EngineBuilder::new()
//!     .add(Box::new(AssignColorPredicate::new(&graph, &budgets, vec![0, 1], None)))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! match engine.search(&mut ctx) {
//!     SearchStatus::Suspended(_engine) => assert!(ctx.is_solution()),
//!     _ => unreachable!("an edge with budgets 1 is colorable"),
//! }
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use crate::state::Counters;
use tracing::trace;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether try_pred has already run for this entry.
    tried: bool,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            tried: false,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// How a call to [`SearchEngine::search`] ended.
#[derive(Debug)]
pub enum SearchStatus {
    /// A predicate suspended. The context holds the state at that point and
    /// the engine can be resumed with another `search` call.
    Suspended(SearchEngine),

    /// Every choice was explored (backtracked past the first predicate).
    Exhausted,

    /// The cutoff was reached before the search completed.
    Cancelled,
}

/// Builds a predicate program that is guaranteed to end with a terminal predicate.
///
/// # Example
///
/// ```
/// use mu_coloring::engine::EngineBuilder;
/// use mu_coloring::predicates::FailPredicate;
/// use mu_coloring::predicates::test::MultiRoundPredicate;
///
/// let engine = EngineBuilder::new()
///     .add(Box::new(MultiRoundPredicate::new(3)))
///     .terminal(Box::new(FailPredicate))
///     .build();
/// assert_eq!(engine.statistics(), (0, 0));
/// ```
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// End the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminalBuilder {
        self.predicates.push(predicate);
        TerminalBuilder {
            predicates: self.predicates,
        }
    }
}

/// A complete program, ready to build.
#[derive(Debug)]
pub struct TerminalBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl TerminalBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until a predicate suspends, the choices run out, or the
    /// cutoff is reached.
    ///
    /// Consumes the engine. A suspended engine is handed back inside
    /// [`SearchStatus::Suspended`]; calling `search` on it again resumes the
    /// search just after the suspension point, so repeated calls visit every
    /// solution in order. Exhausted and cancelled engines are consumed.
    ///
    /// Success is indicated via side effects (the coloring in `ctx`), not by
    /// the return value: programs never "complete", they fail or suspend.
    ///
    /// # Panics
    ///
    /// Panics if a predicate breaks the protocol: a terminal predicate that
    /// returns Success, or retry_pred returning Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext<'_>) -> SearchStatus {
        if self.stack.is_empty() {
            if self.predicates.is_empty() {
                return SearchStatus::Exhausted;
            }
            self.stack.push(StackEntry::new(0, 0, ctx.trail.len()));
        }

        loop {
            if ctx.cutoff_reached() {
                trace!(depth = self.stack.len(), "cutoff reached");
                return SearchStatus::Cancelled;
            }

            let Some(entry) = self.stack.last_mut() else {
                return SearchStatus::Exhausted;
            };

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                if entry.tried {
                    // Deterministic success being backtracked into: nothing left to try
                    self.backtrack(ctx);
                    continue;
                }
                entry.tried = true;

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                ctx.count(Counters::Tries);
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => self.backtrack(ctx),
                    PredicateResult::Choices(n) => {
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = ctx.trail.len();
                        }
                    }
                    PredicateResult::Suspend => {
                        trace!(
                            predicate = self.predicates[pred_idx].name(),
                            "search suspended"
                        );
                        return SearchStatus::Suspended(self);
                    }
                }
            } else {
                // Check if we've exhausted all choices
                if entry.current_choice >= entry.num_choices {
                    self.backtrack(ctx);
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                ctx.count(Counters::Retries);
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!(
                            "{}::retry_pred returned invalid result: {:?}",
                            self.predicates[pred_idx].name(),
                            result
                        );
                    }
                }
            }
        }
    }

    fn backtrack(&mut self, ctx: &mut SearchContext<'_>) {
        self.stack.pop();
        ctx.count(Counters::Backtracks);
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// a terminal predicate returned Success.
    fn push_next_predicate(&mut self, ctx: &mut SearchContext<'_>) {
        let next_index = self.stack.last().map_or(0, |entry| entry.predicate_index + 1);

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &mut SearchContext<'_>) {
        let (pred_index, next_round) = self
            .stack
            .last()
            .map_or((0, 0), |entry| (entry.predicate_index, entry.round + 1));

        self.stack
            .push(StackEntry::new(pred_index, next_round, ctx.trail.len()));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }

    /// Current depth of the choice stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Budgets, Graph};
    use crate::predicates::test::MultiRoundPredicate;
    use crate::predicates::{FailPredicate, SuspendPredicate};
    use crate::solver::cutoff::CancellationToken;

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    fn problem() -> (Graph, Budgets) {
        let graph = Graph::empty(1);
        let budgets = Budgets::uniform(&graph, 0);
        (graph, budgets)
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let (graph, budgets) = problem();
        let mut ctx = SearchContext::new(&graph, &budgets);
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let SearchStatus::Suspended(engine) = engine.search(&mut ctx) else {
            panic!("expected suspension");
        };
        assert_eq!(engine.statistics(), (2, 0)); // AlwaysSucceed + Suspend, no retries
    }

    #[test]
    fn test_immediate_failure() {
        let (graph, budgets) = problem();
        let mut ctx = SearchContext::new(&graph, &budgets);
        let engine = EngineBuilder::new()
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted));
    }

    #[test]
    fn test_deterministic_success_not_retried() {
        let (graph, budgets) = problem();
        let mut ctx = SearchContext::new(&graph, &budgets);
        let engine = EngineBuilder::new()
            .add(Box::new(MultiRoundPredicate::new(3)))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted));
        // Three rounds of MultiRound and one Fail, each tried once
        assert_eq!(ctx.statistics.get(Counters::Tries), 4);
        assert_eq!(ctx.statistics.get(Counters::Backtracks), 4);
    }

    #[test]
    fn test_cancelled_before_first_step() {
        let (graph, budgets) = problem();
        let token = CancellationToken::new();
        token.cancel();
        let mut ctx = SearchContext::with_cutoff(&graph, &budgets, &token);
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        assert!(matches!(engine.search(&mut ctx), SearchStatus::Cancelled));
        assert_eq!(ctx.statistics.get(Counters::Tries), 0);
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_terminal_returning_success_panics() {
        #[derive(Debug)]
        struct BrokenTerminal;
        impl Predicate for BrokenTerminal {
            fn try_pred(&mut self, _ctx: &mut SearchContext<'_>, _round: usize) -> PredicateResult {
                PredicateResult::Success
            }
        }
        impl TerminalPredicate for BrokenTerminal {}

        let (graph, budgets) = problem();
        let mut ctx = SearchContext::new(&graph, &budgets);
        let engine = EngineBuilder::new()
            .terminal(Box::new(BrokenTerminal))
            .build();

        let _ = engine.search(&mut ctx); // Should panic
    }
}
