//! Single-source shortest path engine built around Dijkstra's algorithm.
//!
//! The crate computes one full shortest-path tree per run over a graph with
//! integer, non-negative edge weights. Parallel edges are kept as distinct
//! adjacency entries; an undirected insertion is shorthand for inserting both
//! directed arcs. Vertex ids are 1-based and live in `[1, V]`, with V fixed
//! when the graph is created.
//!
//! The typical flow is: build a graph, run the engine from a source, query
//! distances and paths against the stored tables, then `clear` and repeat.
//! Queries before any run fail with [`Error::NotComputed`]. Mutating the
//! graph after a run does *not* invalidate the stored tables; re-running is
//! the caller's responsibility (see [`engine::ShortestPathEngine`]).
//!
//! Unreachable vertices are `None` in the safe API. The C surface (feature
//! `ffi`) maps them to a single documented sentinel, `-1`; the internal
//! tables never hold that value.
//!
//! Everything is synchronous and single-threaded; the engine owns all of its
//! state, so wrapping it in a lock is enough for shared use.

pub mod algorithm;
pub mod data_structures;
pub mod engine;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathTree};
pub use engine::ShortestPathEngine;
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid vertex count: {0} (a graph needs at least one vertex)")]
    InvalidSize(usize),

    #[error("vertex id {0} out of range 1..={1}")]
    OutOfRange(usize, usize),

    #[error("negative edge weight: {0}")]
    NegativeWeight(i64),

    #[error("no shortest-path run has completed; call run() first")]
    NotComputed,

    #[error("output buffer too small: path needs {0} slots, capacity is {1}")]
    BufferTooSmall(usize, usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
