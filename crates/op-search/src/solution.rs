//! Turning the winning walk into what rendering and persistence consume.

use op_core::CityId;
use op_graph::Graph;

use crate::WalkResult;

/// Consecutive `(from, to)` steps of a visited sequence.
///
/// A sequence of length `L` yields `L - 1` pairs; `L <= 1` yields none.
pub fn to_edges<T: Copy>(sequence: &[T]) -> Vec<(T, T)> {
    sequence.windows(2).map(|w| (w[0], w[1])).collect()
}

/// The reported answer of a solve request: the best walk plus its edge list.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub walk:  WalkResult,
    pub edges: Vec<(CityId, CityId)>,
}

impl Solution {
    pub fn from_walk(walk: WalkResult) -> Self {
        let edges = to_edges(&walk.path);
        Self { walk, edges }
    }

    #[inline]
    pub fn reward(&self) -> f64 {
        self.walk.reward
    }

    #[inline]
    pub fn time_left(&self) -> f64 {
        self.walk.time_left
    }

    #[inline]
    pub fn path(&self) -> &[CityId] {
        &self.walk.path
    }

    /// City names along the path, in visiting order.
    pub fn city_names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.walk.path.iter().map(|&c| graph.name(c)).collect()
    }

    /// The edge list with city names, for plotting and the solution summary.
    pub fn named_edges<'g>(&self, graph: &'g Graph) -> Vec<(&'g str, &'g str)> {
        self.edges
            .iter()
            .map(|&(from, to)| (graph.name(from), graph.name(to)))
            .collect()
    }
}
