use ordered_float::OrderedFloat;
use route_solver::graph::{Graph, MutableGraph};
use route_solver::{AdjacencyGraph, Dijkstra, ShortestPathSolver};

/// Builds the six-city demonstration network
///
/// Weights are symbolic road distances; each road is entered in both
/// directions to model an undirected network.
fn build_city_graph() -> AdjacencyGraph<&'static str, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::new();

    let roads = [
        ("A", "B", 5.0),
        ("A", "C", 10.0),
        ("B", "C", 3.0),
        ("B", "D", 9.0),
        ("C", "D", 1.0),
        ("C", "E", 7.0),
        ("D", "E", 2.0),
        ("E", "F", 4.0),
        ("B", "F", 20.0),
    ];

    for (from, to, distance) in roads {
        graph.add_edge(from, to, OrderedFloat(distance));
        graph.add_edge(to, from, OrderedFloat(distance));
    }

    graph
}

fn main() {
    env_logger::init();

    let graph = build_city_graph();
    let (start, end) = ("A", "F");

    println!("--- Shortest route demo ---");
    println!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let solver = Dijkstra::new();
    let result = solver.solve(&graph, &start).expect("start vertex exists in the demo graph");

    let path = result.path_to(&end);
    if path.is_empty() {
        println!("No path found from {} to {}", start, end);
    } else {
        println!("Shortest path from {} to {}: {}", start, end, path.join(" -> "));
        if let Some(distance) = result.distance(&end) {
            println!("Total distance: {:.2}", distance.into_inner());
        }
    }

    println!(
        "\n{} distances from {}:",
        <Dijkstra as ShortestPathSolver<
            &'static str,
            OrderedFloat<f64>,
            AdjacencyGraph<&'static str, OrderedFloat<f64>>,
        >>::name(&solver),
        start
    );
    let mut vertices: Vec<&'static str> = graph.vertices().cloned().collect();
    vertices.sort();
    for vertex in vertices {
        match result.distance(&vertex) {
            Some(distance) => println!("  {} -> {} : {:.2}", start, vertex, distance.into_inner()),
            None => println!("  {} -> {} : unreachable", start, vertex),
        }
    }
}
