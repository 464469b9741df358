use crate::graph::adjacency::AdjacencyGraph;
use rand::prelude::*;

/// Generates a random directed graph with roughly `edges` arcs.
///
/// Endpoints are drawn uniformly from `[1, vertices]`; self-loops are skipped
/// (so the final arc count can fall slightly short), weights are uniform in
/// `[1, max_weight]`. Useful for benchmarks and property checks, not for
/// modelling any particular topology.
pub fn random_graph(vertices: usize, edges: usize, max_weight: i64) -> AdjacencyGraph<i64> {
    assert!(vertices > 0, "random_graph needs at least one vertex");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = AdjacencyGraph::new(vertices).expect("vertex count checked above");
    let mut rng = rand::thread_rng();

    for _ in 0..edges {
        let u = rng.gen_range(1..=vertices);
        let v = rng.gen_range(1..=vertices);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            graph
                .add_edge(u, v, weight)
                .expect("generated endpoints are in range");
        }
    }

    graph
}

/// Generates a `width` x `height` grid with unit-weight undirected edges.
///
/// Cell `(x, y)` (0-based coordinates) becomes vertex `y * width + x + 1`;
/// each cell connects to its right and lower neighbour, which yields full
/// 4-neighbour connectivity. The shortest distance between two cells equals
/// their Manhattan distance, which makes the grid handy for verification.
pub fn grid_graph(width: usize, height: usize) -> AdjacencyGraph<i64> {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let mut graph =
        AdjacencyGraph::new(width * height).expect("grid has at least one vertex");

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x + 1;
            if x + 1 < width {
                graph
                    .add_edge_undirected(vertex, vertex + 1, 1)
                    .expect("grid neighbours are in range");
            }
            if y + 1 < height {
                graph
                    .add_edge_undirected(vertex, vertex + width, 1)
                    .expect("grid neighbours are in range");
            }
        }
    }

    graph
}
