// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver results normalized for presentation.
//!
//! A [`Report`] pairs an [`Outcome`] with the solver that produced it, so
//! `NoSolution` can be read correctly: a proof from the exhaustive solver,
//! only a heuristic failure from the greedy one. `Unknown` always renders as
//! an incomplete search.

use crate::graph::{Coloring, Vertex};
use crate::outcome::{Outcome, UnknownReason};
use crate::solver::{ExhaustiveRun, GreedyRun};
use crate::state::Statistics;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Greedy,
    Exhaustive,
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Greedy => write!(f, "greedy"),
            SolverKind::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

/// How an outcome should be read, given which solver produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A valid total coloring using this many distinct colors.
    Colored { colors: usize },

    /// Greedy gave up; a coloring may still exist.
    HeuristicFailure,

    /// The exhaustive search proved no coloring exists.
    ProvenUncolorable,

    /// The search stopped before deciding.
    Incomplete(UnknownReason),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Colored { colors } => write!(f, "solved with {} colors", colors),
            Verdict::HeuristicFailure => write!(f, "heuristic failure (a coloring may still exist)"),
            Verdict::ProvenUncolorable => write!(f, "provably uncolorable"),
            Verdict::Incomplete(reason) => write!(f, "search incomplete: {}", reason),
        }
    }
}

/// One solver's result, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    solver: SolverKind,
    outcome: Outcome,
    partial: Option<Coloring>,
    unassigned: Vec<Vertex>,
    statistics: Option<Statistics>,
    elapsed: Duration,
}

impl Report {
    pub fn from_greedy(run: GreedyRun, elapsed: Duration) -> Self {
        let partial = (!run.outcome.is_solved()).then_some(run.coloring);
        Self {
            solver: SolverKind::Greedy,
            outcome: run.outcome,
            partial,
            unassigned: run.unassigned,
            statistics: None,
            elapsed,
        }
    }

    pub fn from_exhaustive(run: ExhaustiveRun, elapsed: Duration) -> Self {
        Self {
            solver: SolverKind::Exhaustive,
            outcome: run.outcome,
            partial: None,
            unassigned: Vec::new(),
            statistics: Some(run.statistics),
            elapsed,
        }
    }

    pub fn solver(&self) -> SolverKind {
        self.solver
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// The coloring a failed greedy pass left behind.
    pub fn partial(&self) -> Option<&Coloring> {
        self.partial.as_ref()
    }

    /// Vertices a failed greedy pass could not color.
    pub fn unassigned(&self) -> &[Vertex] {
        &self.unassigned
    }

    /// Search counters, for exhaustive runs.
    pub fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn verdict(&self) -> Verdict {
        match (&self.outcome, self.solver) {
            (Outcome::Solved(coloring), _) => Verdict::Colored {
                colors: coloring.distinct_colors(),
            },
            (Outcome::NoSolution, SolverKind::Greedy) => Verdict::HeuristicFailure,
            (Outcome::NoSolution, SolverKind::Exhaustive) => Verdict::ProvenUncolorable,
            (Outcome::Unknown(reason), _) => Verdict::Incomplete(*reason),
        }
    }
}

/// Summary line, then the coloring or the uncolored vertices, then counters.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} ({:.3} ms)",
            self.solver,
            self.verdict(),
            self.elapsed.as_secs_f64() * 1000.0
        )?;
        if let Outcome::Solved(coloring) = &self.outcome {
            write!(f, "{}", coloring)?;
        }
        if !self.unassigned.is_empty() {
            let vertices: Vec<String> = self.unassigned.iter().map(|v| v.to_string()).collect();
            writeln!(f, "uncolored: {}", vertices.join(" "))?;
        }
        if let Some(statistics) = &self.statistics {
            writeln!(f, "{}", statistics)?;
        }
        Ok(())
    }
}
