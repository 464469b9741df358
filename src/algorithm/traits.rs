use crate::graph::Graph;
use crate::Result;
use num_traits::PrimInt;
use std::fmt::Debug;

/// Distance and predecessor tables produced by one shortest-path run.
///
/// Both tables are indexed directly by 1-based vertex id (slot 0 is reserved
/// and stays `None`). `distances[v]` is `None` while a vertex is unreached;
/// that is the internal representation of "infinite", so a finite-but-large
/// distance can never be mistaken for it. `predecessors[v]` is `None` for
/// the source and for unreached vertices. The tables describe exactly one
/// source and are only valid for the graph they were computed against.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPathTree<W>
where
    W: PrimInt + Debug,
{
    /// Shortest distance from the source to each vertex
    pub distances: Vec<Option<W>>,

    /// Immediate predecessor of each vertex on its shortest path
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex the tree is rooted at
    pub source: usize,
}

impl<W> ShortestPathTree<W>
where
    W: PrimInt + Debug,
{
    /// Returns the shortest distance to `vertex`, or `None` when the vertex
    /// is unreached (or the id is not a vertex of the graph).
    pub fn distance(&self, vertex: usize) -> Option<W> {
        if vertex == 0 {
            return None;
        }
        self.distances.get(vertex).copied().flatten()
    }

    /// Reconstructs the source-to-`target` path from the predecessor table.
    ///
    /// Returns `None` when `target` is unreached; the path for the source
    /// itself is the single-element sequence `[source]`. The walk follows
    /// predecessors backwards and reverses the result, so it allocates one
    /// `Vec` of at most `vertex_count` elements.
    ///
    /// # Panics
    ///
    /// Panics if the predecessor chain is malformed: a cycle, or a break
    /// before the source is reached. That can only happen when the tables
    /// were tampered with after the run; a corrupt tree must never yield a
    /// plausible-looking path.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut current = target;

        while current != self.source {
            match self.predecessors.get(current).copied().flatten() {
                Some(pred) => {
                    path.push(pred);
                    current = pred;
                }
                None => panic!(
                    "corrupt shortest-path tree: walk from {} broke at {} before reaching source {}",
                    target, current, self.source
                ),
            }

            if path.len() > self.distances.len() {
                panic!(
                    "corrupt shortest-path tree: predecessor cycle on the walk from {} to source {}",
                    target, self.source
                );
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    /// Computes the full shortest-path tree rooted at `source`.
    ///
    /// Fails with [`crate::Error::OutOfRange`] when `source` is not a vertex
    /// of `graph`. Each call builds fresh tables; nothing is reused from
    /// earlier invocations.
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathTree<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
