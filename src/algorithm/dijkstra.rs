use log::debug;
use num_traits::PrimInt;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::MinPriorityQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a binary heap and lazy deletion.
///
/// Stale queue entries (left over from relaxations that were later improved
/// on) are discarded when popped instead of being re-keyed in place. Runtime
/// is O((V + E) log V), memory O(V + E).
///
/// Distance values are fully deterministic. Which of several equal-length
/// paths gets recorded in the predecessor table is not; it follows heap
/// order and edge insertion order. Callers must not rely on one particular
/// tie-break.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + Debug,
    G: Graph<W>,
{
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathTree<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::OutOfRange(source, graph.vertex_count()));
        }

        let n = graph.vertex_count();

        // Tables index directly by 1-based vertex id; slot 0 stays None
        let mut distances: Vec<Option<W>> = vec![None; n + 1];
        let mut predecessors: Vec<Option<usize>> = vec![None; n + 1];

        distances[source] = Some(W::zero());

        let mut queue = MinPriorityQueue::with_capacity(n);
        queue.push(source, W::zero());

        while let Some((u, d)) = queue.pop() {
            // Stale entry: this vertex has been relaxed to something better
            // since the entry was pushed
            if let Some(best) = distances[u] {
                if d > best {
                    continue;
                }
            }

            for (v, w) in graph.outgoing_edges(u) {
                let candidate = d + w;

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                }
            }
        }

        let settled = distances.iter().filter(|d| d.is_some()).count();
        debug!(
            "dijkstra settled {} of {} vertices from source {}",
            settled, n, source
        );

        Ok(ShortestPathTree {
            distances,
            predecessors,
            source,
        })
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
