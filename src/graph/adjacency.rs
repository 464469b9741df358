use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::PrimInt;
use std::fmt::Debug;

/// Adjacency-list graph with a fixed, 1-based vertex range.
///
/// The vertex count is set at construction and never changes; slot 0 of the
/// backing storage is reserved so vertex `v` indexes directly as `adj[v]`.
/// Every insertion appends: parallel arcs between the same ordered pair are
/// kept as distinct entries with their own weights, and the relaxation step
/// of a shortest-path run simply prefers the lightest one. There is no
/// deduplication and no in-place weight update.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyGraph<W>
where
    W: PrimInt + Debug,
{
    /// Number of vertices; ids run over `[1, vertex_count]`
    vertex_count: usize,

    /// Outgoing arcs per vertex: `adjacency[v]` is the ordered list of
    /// `(target, weight)` pairs, in insertion order. Index 0 stays empty.
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> AdjacencyGraph<W>
where
    W: PrimInt + Debug,
{
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// Fails with [`Error::InvalidSize`] when `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::InvalidSize(vertex_count));
        }

        Ok(AdjacencyGraph {
            vertex_count,
            adjacency: vec![Vec::new(); vertex_count + 1],
        })
    }

    /// Appends the directed arc `from -> to` with the given weight.
    ///
    /// Fails with [`Error::OutOfRange`] if either endpoint is outside
    /// `[1, V]` and with [`Error::NegativeWeight`] if `weight < 0`. Nothing
    /// is inserted on failure.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_edge(from, to, weight)?;
        self.adjacency[from].push((to, weight));
        Ok(())
    }

    /// Appends both `u -> v` and `v -> u` with the given weight.
    ///
    /// An undirected edge is exactly that pair of arcs; it is not a distinct
    /// edge kind. Validation matches [`AdjacencyGraph::add_edge`], and on
    /// failure neither arc is inserted.
    pub fn add_edge_undirected(&mut self, u: usize, v: usize, weight: W) -> Result<()> {
        self.check_edge(u, v, weight)?;
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        Ok(())
    }

    /// Removes every edge while keeping the vertex count.
    pub fn clear(&mut self) {
        for edges in &mut self.adjacency {
            edges.clear();
        }
    }

    fn check_edge(&self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::OutOfRange(from, self.vertex_count));
        }
        if !self.has_vertex(to) {
            return Err(Error::OutOfRange(to, self.vertex_count));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_i64().unwrap_or(i64::MIN)));
        }
        Ok(())
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: PrimInt + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.adjacency.get(vertex) {
            Some(edges) if vertex >= 1 => Box::new(edges.iter().copied()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex >= 1 && vertex <= self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        match self.adjacency.get(from) {
            Some(edges) => edges.iter().any(|&(target, _)| target == to),
            None => false,
        }
    }
}
