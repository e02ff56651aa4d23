use crate::graph::{AdjacencyGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a uniformly random directed graph with `n` vertices and
/// approximately `edge_factor * n` edges, with weights in 1.0..100.0
pub fn generate_random(n: usize, edge_factor: f64) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut rng = rand::thread_rng();

    for v in 0..n {
        graph.add_vertex(v);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops and ensure positive weights
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a width x height grid graph with unit-weight edges
///
/// Vertices are numbered row-major; each cell is connected to its four
/// cardinal neighbors in both directions.
pub fn generate_grid(width: usize, height: usize) -> AdjacencyGraph<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);

    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            let directions = [(0i32, -1i32), (1, 0), (0, 1), (-1, 0)];

            for (dx, dy) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(1.0));
                }
            }
        }
    }

    graph
}
