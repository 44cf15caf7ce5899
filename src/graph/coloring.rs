// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Partial or total color assignments.

use super::{Color, Graph, Vertex};
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A mapping from vertices to colors, where any vertex may be unassigned.
///
/// Partial colorings are the intermediate states of a search. Only a total
/// coloring accepted by the oracle is ever reported as a solution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coloring {
    colors: Vec<Option<Color>>,
}

impl Coloring {
    /// An empty coloring with room for `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            colors: vec![None; vertex_count],
        }
    }

    /// An empty coloring sized for `graph`.
    pub fn for_graph(graph: &Graph) -> Self {
        Self::new(graph.vertex_count())
    }

    /// A coloring built from `(vertex, color)` pairs.
    pub fn from_assignments(
        vertex_count: usize,
        assignments: impl IntoIterator<Item = (Vertex, Color)>,
    ) -> Result<Self> {
        let mut coloring = Self::new(vertex_count);
        for (vertex, color) in assignments {
            coloring.assign(vertex, color)?;
        }
        Ok(coloring)
    }

    /// A total coloring where vertex `v` gets `colors[v]`.
    pub fn total(colors: &[Color]) -> Self {
        Self {
            colors: colors.iter().copied().map(Some).collect(),
        }
    }

    /// Color of `vertex`, if assigned. Out-of-range vertices are unassigned.
    pub fn get(&self, vertex: Vertex) -> Option<Color> {
        self.colors.get(vertex).copied().flatten()
    }

    /// Assign `color` to `vertex`, returning the previous color.
    pub fn assign(&mut self, vertex: Vertex, color: Color) -> Result<Option<Color>> {
        let vertex_count = self.colors.len();
        let slot = self.colors.get_mut(vertex).ok_or(Error::UnknownVertex {
            vertex,
            vertex_count,
        })?;
        Ok(slot.replace(color))
    }

    /// Remove the color of `vertex`, returning it.
    pub fn unassign(&mut self, vertex: Vertex) -> Option<Color> {
        self.colors.get_mut(vertex).and_then(Option::take)
    }

    /// Number of vertex slots (assigned or not).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether there are no vertex slots.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of assigned vertices.
    pub fn assigned_count(&self) -> usize {
        self.colors.iter().filter(|c| c.is_some()).count()
    }

    /// Whether every vertex has a color.
    pub fn is_total(&self) -> bool {
        self.colors.iter().all(Option::is_some)
    }

    /// Vertices without a color, ascending.
    pub fn unassigned(&self) -> Vec<Vertex> {
        self.colors
            .iter()
            .enumerate()
            .filter_map(|(vertex, color)| color.is_none().then_some(vertex))
            .collect()
    }

    /// Assigned `(vertex, color)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Color)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .filter_map(|(vertex, color)| color.map(|c| (vertex, c)))
    }

    /// Number of distinct colors in use.
    pub fn distinct_colors(&self) -> usize {
        self.iter().map(|(_, c)| c).collect::<BTreeSet<_>>().len()
    }

    /// Largest color in use.
    pub fn max_color(&self) -> Option<Color> {
        self.iter().map(|(_, c)| c).max()
    }

    /// The assigned pairs as an ordered map.
    pub fn to_map(&self) -> BTreeMap<Vertex, Color> {
        self.iter().collect()
    }

    /// Overwrite a slot without bounds reporting. The search trail uses this to
    /// restore previous values.
    pub(crate) fn set(&mut self, vertex: Vertex, color: Option<Color>) {
        self.colors[vertex] = color;
    }
}

/// One `vertex color` line per assigned vertex, matching the text read by
/// [`parse_coloring`](super::parse::parse_coloring).
impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, color) in self.iter() {
            writeln!(f, "{} {}", vertex, color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_coloring() {
        let mut coloring = Coloring::new(3);
        assert!(!coloring.is_total());
        assert_eq!(coloring.assign(1, 4).unwrap(), None);
        assert_eq!(coloring.assign(1, 2).unwrap(), Some(4));
        assert_eq!(coloring.get(1), Some(2));
        assert_eq!(coloring.get(0), None);
        assert_eq!(coloring.assigned_count(), 1);
        assert_eq!(coloring.unassigned(), vec![0, 2]);
    }

    #[test]
    fn test_assign_out_of_range() {
        let mut coloring = Coloring::new(2);
        assert_eq!(
            coloring.assign(2, 0).unwrap_err(),
            Error::UnknownVertex {
                vertex: 2,
                vertex_count: 2
            }
        );
        assert_eq!(coloring.get(2), None);
        assert_eq!(coloring.unassign(2), None);
    }

    #[test]
    fn test_total_coloring_statistics() {
        let coloring = Coloring::total(&[0, 2, 0, 1]);
        assert!(coloring.is_total());
        assert_eq!(coloring.distinct_colors(), 3);
        assert_eq!(coloring.max_color(), Some(2));
        assert_eq!(
            coloring.to_map(),
            BTreeMap::from([(0, 0), (1, 2), (2, 0), (3, 1)])
        );
    }

    #[test]
    fn test_unassign() {
        let mut coloring = Coloring::from_assignments(2, [(0, 1), (1, 0)]).unwrap();
        assert!(coloring.is_total());
        assert_eq!(coloring.unassign(0), Some(1));
        assert!(!coloring.is_total());
    }

    #[test]
    fn test_display_lists_assigned_vertices() {
        let coloring = Coloring::from_assignments(3, [(2, 1), (0, 0)]).unwrap();
        assert_eq!(coloring.to_string(), "0 0\n2 1\n");
    }

    #[test]
    fn test_empty_graph_coloring_is_total() {
        let coloring = Coloring::new(0);
        assert!(coloring.is_empty());
        assert!(coloring.is_total());
        assert_eq!(coloring.max_color(), None);
    }
}
