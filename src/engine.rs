use log::debug;
use num_traits::PrimInt;
use std::fmt::Debug;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::{AdjacencyGraph, Graph};
use crate::{Error, Result};

/// Stateful facade tying a graph to the tables of its most recent run.
///
/// The engine owns an [`AdjacencyGraph`] and, once [`run`](Self::run) has
/// completed, the [`ShortestPathTree`] it produced. Constructing the engine
/// initializes the graph; queries issued before the first run (or after
/// [`clear`](Self::clear)) fail with [`Error::NotComputed`].
///
/// Edge insertion stays legal after a run, but the stored tables keep
/// describing the graph as it was when `run` was called; the engine never
/// re-checks them. Callers who mutate after a run must call `run` again
/// before trusting any query. `clear` and [`init_graph`](Self::init_graph)
/// are the points where stale tables are actually dropped.
///
/// All operations are synchronous and touch no shared state; to share one
/// engine across threads, serialize access with an external lock.
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<W>
where
    W: PrimInt + Debug,
{
    graph: AdjacencyGraph<W>,
    tree: Option<ShortestPathTree<W>>,
    algorithm: Dijkstra,
}

impl<W> ShortestPathEngine<W>
where
    W: PrimInt + Debug,
{
    /// Creates an engine over a fresh graph with `vertex_count` vertices.
    ///
    /// Fails with [`Error::InvalidSize`] when `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Ok(ShortestPathEngine {
            graph: AdjacencyGraph::new(vertex_count)?,
            tree: None,
            algorithm: Dijkstra::new(),
        })
    }

    /// Replaces the graph with an empty one of `vertex_count` vertices.
    ///
    /// Existing edges are discarded and stored tables dropped. On
    /// [`Error::InvalidSize`] the engine is left untouched.
    pub fn init_graph(&mut self, vertex_count: usize) -> Result<()> {
        self.graph = AdjacencyGraph::new(vertex_count)?;
        self.tree = None;
        debug!("graph re-initialized with {} vertices", vertex_count);
        Ok(())
    }

    /// Inserts the directed arc `from -> to`.
    ///
    /// Legal before and after a run; inserting after a run leaves the stored
    /// tables stale until the next `run` (see the type-level notes).
    pub fn add_edge_directed(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.graph.add_edge(from, to, weight)
    }

    /// Inserts the undirected edge `u <-> v` (both arcs).
    ///
    /// Same staleness caveat as [`add_edge_directed`](Self::add_edge_directed).
    pub fn add_edge_undirected(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.graph.add_edge_undirected(u, v, weight)
    }

    /// Computes the shortest-path tree rooted at `source` and stores it.
    ///
    /// Fails with [`Error::OutOfRange`] for an invalid source, in which case
    /// previously stored tables survive unchanged. Re-running (with any
    /// source) recomputes from scratch; there is no incremental reuse.
    pub fn run(&mut self, source: usize) -> Result<()> {
        let tree = self.algorithm.compute_shortest_paths(&self.graph, source)?;
        self.tree = Some(tree);
        Ok(())
    }

    /// Returns the shortest distance to `dest`, `None` when unreachable.
    pub fn distance(&self, dest: usize) -> Result<Option<W>> {
        self.check_vertex(dest)?;
        Ok(self.computed()?.distance(dest))
    }

    /// Returns the source-to-`dest` path, empty when `dest` is unreachable.
    ///
    /// For `dest == source` the path is the single-element `[source]`.
    pub fn path(&self, dest: usize) -> Result<Vec<usize>> {
        self.check_vertex(dest)?;
        Ok(self.computed()?.path_to(dest).unwrap_or_default())
    }

    /// Writes the source-to-`dest` path into `out` and returns its length.
    ///
    /// An unreachable `dest` writes nothing and returns 0. When the path
    /// does not fit, nothing is written and the call fails with
    /// [`Error::BufferTooSmall`] carrying the needed length; the path is
    /// never truncated. A buffer of `vertex_count()` slots always suffices.
    pub fn path_into(&self, dest: usize, out: &mut [usize]) -> Result<usize> {
        let path = self.path(dest)?;
        if path.len() > out.len() {
            return Err(Error::BufferTooSmall(path.len(), out.len()));
        }
        out[..path.len()].copy_from_slice(&path);
        Ok(path.len())
    }

    /// Returns the dense distance table: entry `i` is the distance of vertex
    /// `i + 1`, `None` when that vertex is unreachable.
    pub fn all_distances(&self) -> Result<Vec<Option<W>>> {
        let tree = self.computed()?;
        Ok((1..=self.graph.vertex_count())
            .map(|v| tree.distance(v))
            .collect())
    }

    /// Removes every edge, keeps the vertex count, and drops stored tables.
    ///
    /// Queries afterwards fail with [`Error::NotComputed`] until `run` is
    /// called again.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.tree = None;
    }

    /// Number of vertices of the underlying graph
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of directed arcs currently stored
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true once a run has completed and its tables are stored
    pub fn is_computed(&self) -> bool {
        self.tree.is_some()
    }

    /// Source vertex of the stored tables, if any
    pub fn source(&self) -> Option<usize> {
        self.tree.as_ref().map(|tree| tree.source)
    }

    /// Read access to the underlying graph
    pub fn graph(&self) -> &AdjacencyGraph<W> {
        &self.graph
    }

    /// The stored shortest-path tree, if a run has completed
    pub fn tree(&self) -> Option<&ShortestPathTree<W>> {
        self.tree.as_ref()
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if !self.graph.has_vertex(vertex) {
            return Err(Error::OutOfRange(vertex, self.graph.vertex_count()));
        }
        Ok(())
    }

    fn computed(&self) -> Result<&ShortestPathTree<W>> {
        self.tree.as_ref().ok_or(Error::NotComputed)
    }
}
