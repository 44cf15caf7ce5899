// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable bookkeeping carried alongside the search.
//!
//! The coloring itself lives in the [`SearchContext`](crate::context::SearchContext)
//! and is restored by the trail; statistics are never rewound.

pub mod statistics;

pub use statistics::{Counters, Statistics};
