// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! External cutoffs for long-running searches.
//!
//! The engine asks its cutoff before every step. A search that is cut off
//! reports [`Outcome::Unknown`](crate::outcome::Outcome::Unknown), never
//! `NoSolution`.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A condition that stops a search once it holds.
///
/// Implementations must be cheap: `reached` is called at every backtracking
/// step.
pub trait Cutoff: Debug + Send + Sync {
    fn reached(&self) -> bool;
}

/// Never stops the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCutoff;

impl Cutoff for NoCutoff {
    fn reached(&self) -> bool {
        false
    }
}

/// Stops the search at a wall-clock instant.
///
/// A deadline too far off for the clock to represent is never reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    pub fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    /// A deadline `limit` from now. `Duration::MAX` means no deadline.
    pub fn after(limit: Duration) -> Self {
        Self(Instant::now().checked_add(limit))
    }

    /// `None` when the deadline lies beyond the clock's range.
    pub fn instant(&self) -> Option<Instant> {
        self.0
    }
}

impl Cutoff for Deadline {
    fn reached(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }
}

/// A shared flag another thread can raise to stop the search.
///
/// Clones share the same flag.
///
/// # Example
///
/// ```
/// use mu_coloring::solver::cutoff::{CancellationToken, Cutoff};
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// assert!(!token.reached());
/// handle.cancel();
/// assert!(token.reached());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Cutoff for CancellationToken {
    fn reached(&self) -> bool {
        self.is_cancelled()
    }
}

impl<C: Cutoff + ?Sized> Cutoff for &C {
    fn reached(&self) -> bool {
        (**self).reached()
    }
}

/// Either cutoff stops the search.
impl<A: Cutoff, B: Cutoff> Cutoff for (A, B) {
    fn reached(&self) -> bool {
        self.0.reached() || self.1.reached()
    }
}

impl<C: Cutoff> Cutoff for Option<C> {
    fn reached(&self) -> bool {
        self.as_ref().is_some_and(|cutoff| cutoff.reached())
    }
}
