use num_traits::PrimInt;
use std::fmt::Debug;

/// Read access to a weighted directed graph with 1-based vertex ids.
///
/// Shortest-path algorithms consume graphs through this trait only; mutation
/// stays on the concrete types. Vertex ids run from 1 to `vertex_count()`
/// inclusive, and every query tolerates ids outside that range (empty
/// iterator, `false`) rather than panicking.
pub trait Graph<W>: Debug
where
    W: PrimInt + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed arcs stored in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing `(target, weight)` arcs of a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if `vertex` lies in `[1, vertex_count()]`
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if at least one arc `from -> to` exists
    fn has_edge(&self, from: usize, to: usize) -> bool;
}
