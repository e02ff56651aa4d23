use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::warn;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path solve
///
/// Holds the distance and predecessor mappings computed from one start
/// vertex. Both are fixed once the solve returns; callers read them through
/// the accessors and never observe intermediate relaxation state.
#[derive(Debug, Clone)]
pub struct SolveResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Finite distances from the start vertex; unreachable vertices are absent
    distances: HashMap<V, W>,

    /// Predecessor vertices in the shortest path tree; the start vertex and
    /// unreachable vertices have none
    predecessors: HashMap<V, V>,

    /// Start vertex the solve ran from
    start: V,
}

impl<V, W> SolveResult<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(distances: HashMap<V, W>, predecessors: HashMap<V, V>, start: V) -> Self {
        SolveResult {
            distances,
            predecessors,
            start,
        }
    }

    /// The start vertex this result was computed from
    pub fn start(&self) -> &V {
        &self.start
    }

    /// Shortest distance from the start vertex, or `None` if unreachable
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Predecessor of `vertex` on a shortest path from the start vertex
    ///
    /// The start vertex and unreachable vertices have no predecessor.
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)
    }

    /// Returns true if a path from the start vertex exists
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Number of vertices reachable from the start vertex, itself included
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    /// Reconstructs the shortest path from the start vertex to `end`
    ///
    /// Returns the vertices from start to end inclusive, walking the
    /// predecessor links backward. `end == start` yields the single-element
    /// path. An unreachable `end`, or one unknown at solve time, yields an
    /// empty path; absence of a path is not an error.
    pub fn path_to(&self, end: &V) -> Vec<V> {
        if *end == self.start {
            return vec![end.clone()];
        }

        let mut path = vec![end.clone()];
        let mut current = end;

        while let Some(pred) = self.predecessors.get(current) {
            path.push(pred.clone());
            if *pred == self.start {
                path.reverse();
                return path;
            }
            // A simple chain can visit each reachable vertex at most once;
            // anything longer means the predecessor map did not come from a
            // single solve.
            if path.len() > self.reachable_count() {
                warn!("Predecessor chain exceeds reachable vertex count, refusing to reconstruct");
                return Vec::new();
            }
            current = pred;
        }

        // The chain ran out before reaching the start vertex
        Vec::new()
    }
}

/// Trait for shortest path solvers
pub trait ShortestPathSolver<V, W, G>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a start vertex to all reachable vertices
    ///
    /// The graph is borrowed immutably for the duration of the call, and
    /// each call produces an independent result.
    fn solve(&self, graph: &G, start: &V) -> Result<SolveResult<V, W>>;

    /// Get the name of the solver
    fn name(&self) -> &'static str;
}
