use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph implementation using adjacency lists
///
/// Vertex identifiers are free-form keys; a dense integer id space is not
/// assumed. Each vertex maps to the ordered sequence of its outgoing edges,
/// and edges referencing an unknown endpoint register it on the spot.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        AdjacencyGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new directed graph with room for the given vertex count
    pub fn with_capacity(vertices: usize) -> Self {
        AdjacencyGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Validate that the graph doesn't have negative weights
    ///
    /// Advisory check for callers that want to assert the solver's
    /// precondition up front; nothing in the engine calls this implicitly.
    pub fn validate_non_negative(&self) -> bool {
        for edges in self.outgoing_edges.values() {
            for (_target, weight) in edges {
                if *weight < W::zero() {
                    return false;
                }
            }
        }
        true
    }
}

impl<V, W> Default for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for AdjacencyGraph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) {
        self.outgoing_edges.entry(vertex).or_default();
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) {
        // Register the target first so that edges to brand-new vertices
        // leave them known to the graph with an empty outgoing list.
        self.outgoing_edges.entry(to.clone()).or_default();
        self.outgoing_edges.entry(from).or_default().push((to, weight));
    }
}
