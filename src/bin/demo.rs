use sssp_engine::ShortestPathEngine;

fn main() {
    env_logger::init();

    // Classic five-vertex worked example, undirected throughout. Note the
    // parallel pairs 2/4 and 3/5: both weights stay in the graph.
    let mut engine = ShortestPathEngine::<i64>::new(5).unwrap();
    let edges = [
        (1, 2, 7),
        (1, 4, 2),
        (2, 3, 1),
        (2, 4, 2),
        (3, 5, 4),
        (4, 2, 3),
        (4, 3, 8),
        (4, 5, 5),
        (5, 3, 5),
    ];
    for &(u, v, w) in &edges {
        engine.add_edge_undirected(u, v, w).unwrap();
    }

    let source = 1;
    engine.run(source).unwrap();

    println!(
        "Graph: {} vertices, {} arcs ({} undirected insertions)",
        engine.vertex_count(),
        engine.edge_count(),
        edges.len()
    );
    println!("Shortest paths from vertex {}:", source);

    for vertex in 1..=engine.vertex_count() {
        match engine.distance(vertex).unwrap() {
            None => println!("  Vertex {}: unreachable", vertex),
            Some(distance) => {
                let path = engine.path(vertex).unwrap();
                let rendered = path
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                println!(
                    "  Vertex {}: distance = {}, path = {}",
                    vertex, distance, rendered
                );
            }
        }
    }
}
