use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;

/// Generates a random sparse digraph over nodes `0..n` with roughly `edge_factor * n`
/// edges and integer weights drawn from `min_weight..=max_weight`.
/// Self-loops are never produced.
pub fn generate_random<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    min_weight: u32,
    max_weight: u32,
) -> DirectedGraph<usize, u32> {
    assert!(min_weight <= max_weight, "min_weight must not exceed max_weight");

    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(min_weight..=max_weight));
        }
    }

    graph
}

/// Generates a layered DAG: `layers` layers of `width` nodes each, a source node `0` feeding
/// the first layer and a sink node `layers * width + 1` fed by the last one.
/// Consecutive layers are fully connected with random weights in `1..=max_weight`.
pub fn generate_layered<R: Rng>(
    rng: &mut R,
    layers: usize,
    width: usize,
    max_weight: u32,
) -> DirectedGraph<usize, u32> {
    assert!(layers > 0 && width > 0, "layers and width must be positive");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = DirectedGraph::new();
    let node = |layer: usize, i: usize| 1 + layer * width + i;
    let sink = layers * width + 1;

    for i in 0..width {
        graph.add_edge(0, node(0, i), rng.gen_range(1..=max_weight));
        graph.add_edge(node(layers - 1, i), sink, rng.gen_range(1..=max_weight));
    }
    for layer in 0..layers - 1 {
        for i in 0..width {
            for j in 0..width {
                graph.add_edge(node(layer, i), node(layer + 1, j), rng.gen_range(1..=max_weight));
            }
        }
    }

    graph
}

/// Generates a 2D grid graph with dimensions width*height, where every cell is linked
/// to its four neighbours in both directions with unit weight.
/// Cell (x, y) has identifier `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, u32> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            graph.add_node(current);
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), 1);
                graph.add_edge(index(x + 1, y), current, 1);
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), 1);
                graph.add_edge(index(x, y + 1), current, 1);
            }
        }
    }

    graph
}
