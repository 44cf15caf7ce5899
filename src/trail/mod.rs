// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the coloring search.
//!
//! Every change to the coloring during search is recorded on the trail
//! together with the value it replaced. Backtracking rewinds the trail to an
//! earlier length, undoing the changes in reverse order, so restoring a
//! choice point costs time proportional to the work done since it.

use crate::graph::{Color, Coloring, Vertex};

/// A single entry in the trail, recording one coloring change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    /// The vertex whose color changed
    vertex: Vertex,
    /// The color before the change
    old_color: Option<Color>,
}

/// The trail of coloring changes since the search began.
///
/// The trail length is the checkpoint: remember `len()` before making
/// changes, and `rewind_to` that value to undo them.
///
/// # Example
///
/// ```
/// use mu_coloring::graph::Coloring;
/// use mu_coloring::trail::Trail;
///
/// let mut coloring = Coloring::new(2);
/// let mut trail = Trail::new();
///
/// let checkpoint = trail.len();
/// trail.assign(&mut coloring, 0, 1);
/// trail.assign(&mut coloring, 1, 0);
/// assert!(coloring.is_total());
///
/// trail.rewind_to(checkpoint, &mut coloring);
/// assert_eq!(coloring.assigned_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trail with room for `capacity` changes.
    ///
    /// A coloring search never holds more than one live change per vertex.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Set `vertex` to `color`, recording the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is outside the coloring.
    pub fn assign(&mut self, coloring: &mut Coloring, vertex: Vertex, color: Color) {
        self.set(coloring, vertex, Some(color));
    }

    /// Clear the color of `vertex`, recording the previous value.
    pub fn unassign(&mut self, coloring: &mut Coloring, vertex: Vertex) {
        self.set(coloring, vertex, None);
    }

    fn set(&mut self, coloring: &mut Coloring, vertex: Vertex, color: Option<Color>) {
        self.entries.push(TrailEntry {
            vertex,
            old_color: coloring.get(vertex),
        });
        coloring.set(vertex, color);
    }

    /// Undo every change recorded after `checkpoint`, newest first.
    ///
    /// Rewinding to a checkpoint at or beyond the current length does nothing.
    pub fn rewind_to(&mut self, checkpoint: usize, coloring: &mut Coloring) {
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                coloring.set(entry.vertex, entry.old_color);
            }
        }
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
