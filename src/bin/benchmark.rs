use std::time::{Duration, Instant};

use sssp_engine::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use sssp_engine::graph::{generators, AdjacencyGraph, Graph};

// Times one full run and counts how many vertices the tree reaches.
fn benchmark_run(graph: &AdjacencyGraph<i64>, source: usize) -> (Duration, usize) {
    let algorithm = Dijkstra::new();

    let start = Instant::now();
    let tree = algorithm.compute_shortest_paths(graph, source).unwrap();
    let duration = start.elapsed();

    let reachable = tree.distances.iter().filter(|d| d.is_some()).count();
    (duration, reachable)
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![
        // Small graphs
        1_000,
        10_000,
        // Medium graphs
        50_000,
        100_000,
        // Large graphs - if memory allows
        200_000,
        500_000,
    ];

    // Average number of arcs per vertex
    let edge_factor = 2;

    println!("=====================================================");
    println!("Benchmark: Dijkstra on random integer-weighted graphs");
    println!("Edge factor: {} arcs per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generators::random_graph(size, size * edge_factor, 100);
        let source = 1;

        println!(
            "Graph has {} vertices and {} arcs",
            graph.vertex_count(),
            graph.edge_count()
        );

        let (duration, reachable) = benchmark_run(&graph, source);
        println!("  - Reached {} vertices in {:?}", reachable, duration);

        results.push((size, graph.edge_count(), duration, reachable));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<12} | {:<10}",
        "Vertices", "Arcs", "Time (ms)", "Reachable"
    );
    println!("-----------------------------------------------------");

    for (size, arcs, duration, reachable) in &results {
        println!(
            "{:<10} | {:<10} | {:<12.2} | {:<10}",
            size,
            arcs,
            duration.as_secs_f64() * 1000.0,
            reachable
        );
    }
}
