use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over all registered vertex identifiers
    ///
    /// Iteration order is unspecified.
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    ///
    /// An unregistered vertex simply has no outgoing edges; the iterator is
    /// empty rather than an error.
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;
}

/// Trait for graph construction operations
///
/// Graphs built through this trait are write-once-then-read: all
/// construction happens before the first solve, and none of these
/// operations can fail.
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Registers a vertex with an empty outgoing-edge list
    ///
    /// Idempotent: registering an already-known vertex is a no-op.
    fn add_vertex(&mut self, vertex: V);

    /// Adds a directed edge between vertices with the given weight
    ///
    /// Both endpoints are registered implicitly if unknown. Parallel edges
    /// between the same ordered pair are retained as distinct edges, and
    /// self-loops are permitted.
    ///
    /// The weight must be finite and non-negative for the solver's
    /// correctness guarantee to hold; this is a precondition of the solve,
    /// not a construction-time check.
    fn add_edge(&mut self, from: V, to: V, weight: W);
}
