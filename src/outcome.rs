// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver outcomes.

use crate::graph::{Color, Coloring};
use std::fmt;

/// Why a search ended without a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownReason {
    /// Every candidate up to the ceiling was tried, but the ceiling is below
    /// some budget, so colors the budgets allow were never considered.
    CeilingReached { ceiling: Color },

    /// The cutoff (deadline or cancellation) stopped the search.
    Cancelled,
}

impl fmt::Display for UnknownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownReason::CeilingReached { ceiling } => {
                write!(f, "no coloring with colors up to ceiling {}", ceiling)
            }
            UnknownReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// The result of one solver invocation.
///
/// Callers must branch on all three cases: `Unknown` is not `NoSolution`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A total coloring accepted by the oracle.
    Solved(Coloring),

    /// No valid total coloring was found. For the exhaustive solver this is a
    /// proof; for the greedy solver it is only a heuristic failure.
    NoSolution,

    /// The search stopped before it could decide.
    Unknown(UnknownReason),
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }

    /// The coloring, if solved.
    pub fn coloring(&self) -> Option<&Coloring> {
        match self {
            Outcome::Solved(coloring) => Some(coloring),
            _ => None,
        }
    }

    pub fn into_coloring(self) -> Option<Coloring> {
        match self {
            Outcome::Solved(coloring) => Some(coloring),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let solved = Outcome::Solved(Coloring::total(&[0]));
        assert!(solved.is_solved());
        assert_eq!(solved.coloring(), Some(&Coloring::total(&[0])));

        assert!(!Outcome::NoSolution.is_solved());
        assert_eq!(Outcome::NoSolution.into_coloring(), None);
        assert_ne!(Outcome::NoSolution, Outcome::Unknown(UnknownReason::Cancelled));
    }

    #[test]
    fn test_unknown_reason_display() {
        assert_eq!(
            UnknownReason::CeilingReached { ceiling: 2 }.to_string(),
            "no coloring with colors up to ceiling 2"
        );
    }
}
