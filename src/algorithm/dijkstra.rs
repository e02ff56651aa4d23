use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{ShortestPathSolver, SolveResult};
use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Correctness rests on the non-negative-weight precondition: once a vertex
/// is popped with its true minimal distance, no later relaxation can improve
/// it, because every remaining frontier entry is at least as distant and
/// every edge weight is >= 0. Negative weights void the guarantee and are
/// not detected here.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra solver instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W, G> ShortestPathSolver<V, W, G> for Dijkstra
where
    V: Clone + Eq + Ord + Hash + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn solve(&self, graph: &G, start: &V) -> Result<SolveResult<V, W>> {
        if !graph.has_vertex(start) {
            return Err(Error::StartNotFound(format!("{:?}", start)));
        }

        let mut distances: HashMap<V, W> = HashMap::with_capacity(graph.vertex_count());
        let mut predecessors: HashMap<V, V> = HashMap::new();

        // Distance to start is 0; every other vertex is implicitly at
        // infinity by being absent from the map
        distances.insert(start.clone(), W::zero());

        let mut frontier = Frontier::new();
        frontier.push(start.clone(), W::zero());

        // Main relaxation loop
        while let Some((current, dist_current)) = frontier.pop() {
            // The frontier is append-only, so a vertex can surface more than
            // once; skip entries made stale by a later improvement
            if let Some(&best) = distances.get(&current) {
                if best < dist_current {
                    continue;
                }
            }

            // Relax all outgoing edges
            for (neighbor, weight) in graph.outgoing_edges(&current) {
                let candidate = dist_current + weight;

                let improves = match distances.get(neighbor) {
                    None => true,
                    Some(&best) => candidate < best,
                };

                if improves {
                    trace!(
                        "Relaxed {:?} -> {:?} to distance {:?}",
                        current,
                        neighbor,
                        candidate
                    );
                    distances.insert(neighbor.clone(), candidate);
                    predecessors.insert(neighbor.clone(), current.clone());
                    frontier.push(neighbor.clone(), candidate);
                }
            }
        }

        debug!(
            "Solve from {:?} settled {} of {} vertices",
            start,
            distances.len(),
            graph.vertex_count()
        );

        Ok(SolveResult::new(distances, predecessors, start.clone()))
    }
}
