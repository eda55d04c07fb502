mod common;

use common::{assert_valid_path, nodes_of, routing_graph};
use kshortest::graph::generators::{generate_grid, generate_random};
use kshortest::graph::{DirectedGraph, Graph, MutableGraph};
use kshortest::{
    bidirectional_dijkstra, dijkstra, shortest_path, shortest_paths_batch, BannedEdges,
    BidirectionalDijkstra, Dijkstra, PathSearch, SearchMode,
};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_single_path() {
    let graph = routing_graph();

    let path = shortest_path(&graph, &"S", &"T", SearchMode::Bidirectional).expect("A path should exist");

    assert!(path.len() > 2, "Path length error");
    assert_eq!(nodes_of(&path), vec!["S", "A", "C", "D", "G", "T"]);
    assert_eq!(path.weight(), 5);
    assert_eq!(path.start(), &"S");
    assert_eq!(path.end(), &"T");
    assert_valid_path(&graph, &path, &"S", &"T");
}

#[test]
fn test_shortcut() {
    let mut graph = routing_graph();
    graph.add_edge("C", "T", 1);

    let path = shortest_path(&graph, &"S", &"T", SearchMode::Bidirectional).expect("A path should exist");

    assert_eq!(nodes_of(&path), vec!["S", "A", "C", "T"]);
    assert_eq!(path.weight(), 3);
    assert_valid_path(&graph, &path, &"S", &"T");

    // Removing the shortcut restores the original answer
    graph.remove_edge(&"C", &"T");
    let path = shortest_path(&graph, &"S", &"T", SearchMode::Bidirectional).expect("A path should exist");
    assert_eq!(path.weight(), 5);
}

#[test]
fn test_unreachable() {
    let graph = routing_graph();

    assert!(shortest_path(&graph, &"S", &"U", SearchMode::Vanilla).is_none());
    assert!(shortest_path(&graph, &"S", &"U", SearchMode::Bidirectional).is_none());
    // Edges only go one way
    assert!(shortest_path(&graph, &"T", &"S", SearchMode::Vanilla).is_none());
    assert!(shortest_path(&graph, &"T", &"S", SearchMode::Bidirectional).is_none());
}

#[test]
fn test_equality() {
    let graph = routing_graph();

    let vanilla = shortest_path(&graph, &"S", &"T", SearchMode::Vanilla).expect("Vanilla search failed");
    let bidirectional =
        shortest_path(&graph, &"S", &"T", SearchMode::Bidirectional).expect("Bidirectional search failed");

    assert_eq!(vanilla, bidirectional, "The algorithms yield different paths");
}

#[test]
fn test_start_equals_end() {
    let graph = routing_graph();

    for mode in [SearchMode::Vanilla, SearchMode::Bidirectional] {
        let path = shortest_path(&graph, &"C", &"C", mode).expect("A node reaches itself");
        assert_eq!(nodes_of(&path), vec!["C"]);
        assert_eq!(path.weight(), 0);
    }
}

#[test]
fn test_zero_weight_path_is_found() {
    let graph = DirectedGraph::from_edges([("a", "b", 0u32), ("b", "c", 0), ("a", "c", 3)]);

    for mode in [SearchMode::Vanilla, SearchMode::Bidirectional] {
        let path = shortest_path(&graph, &"a", &"c", mode).expect("Zero-weight path should be found");
        assert_eq!(path.weight(), 0);
        assert_eq!(nodes_of(&path), vec!["a", "b", "c"]);
    }
}

#[test]
fn test_meeting_on_an_edge_gives_the_optimum() {
    // The two frontiers settle x and y from opposite sides without either side
    // settling both; the lighter route has to be picked up on the x -> y edge.
    let graph = DirectedGraph::from_edges([
        ("s", "x", 2u32),
        ("x", "y", 20),
        ("y", "t", 2),
        ("s", "z", 13),
        ("z", "t", 13),
    ]);

    let vanilla = dijkstra(&graph, &"s", &"t", &BannedEdges::new()).expect("Path should exist");
    let bidirectional = bidirectional_dijkstra(&graph, &"s", &"t", &BannedEdges::new()).expect("Path should exist");

    assert_eq!(vanilla.weight(), 24);
    assert_eq!(bidirectional.weight(), 24);
    assert_eq!(nodes_of(&bidirectional), vec!["s", "x", "y", "t"]);
    assert_valid_path(&graph, &bidirectional, &"s", &"t");
}

#[test]
fn test_banned_edges_are_respected_by_both_engines() {
    let graph = routing_graph();
    let banned: BannedEdges<&str> = [("C", "D")].into_iter().collect();

    let engines: [&dyn PathSearch<&str, u32, DirectedGraph<&str, u32>>; 2] =
        [&Dijkstra, &BidirectionalDijkstra];

    for engine in engines {
        let path = engine
            .search(&graph, &"S", &"T", &banned)
            .unwrap_or_else(|| panic!("{} should route around the ban", engine.name()));
        assert_eq!(nodes_of(&path), vec!["S", "A", "C", "E", "F", "G", "T"]);
        assert_eq!(path.weight(), 6);
        assert!(nodes_of(&path).windows(2).all(|pair| pair != ["C", "D"]));
    }

    // Cutting G -> T leaves nothing
    let banned: BannedEdges<&str> = [("G", "T")].into_iter().collect();
    assert!(dijkstra(&graph, &"S", &"T", &banned).is_none());
    assert!(bidirectional_dijkstra(&graph, &"S", &"T", &banned).is_none());
}

#[test]
fn test_float_weights() {
    let mut graph = DirectedGraph::new();
    graph.add_edge(0usize, 1, OrderedFloat(10.0));
    graph.add_edge(0, 2, OrderedFloat(5.0));
    graph.add_edge(1, 3, OrderedFloat(1.0));
    graph.add_edge(2, 1, OrderedFloat(3.0));
    graph.add_edge(2, 3, OrderedFloat(9.0));
    graph.add_edge(2, 4, OrderedFloat(2.0));
    graph.add_edge(3, 4, OrderedFloat(4.0));
    graph.add_edge(4, 0, OrderedFloat(7.0));
    graph.add_edge(4, 3, OrderedFloat(6.0));

    // Negative weights are refused by the graph
    assert!(!graph.add_edge(3, 0, OrderedFloat(-1.0)));

    for mode in [SearchMode::Vanilla, SearchMode::Bidirectional] {
        let path = shortest_path(&graph, &0, &3, mode).expect("Path should exist");
        assert_eq!(path.weight(), OrderedFloat(9.0));
        assert_eq!(nodes_of(&path), vec![0, 2, 1, 3]);
        assert_valid_path(&graph, &path, &0, &3);
    }
}

#[test]
fn test_grid_paths() {
    let graph = generate_grid(10, 10);

    for mode in [SearchMode::Vanilla, SearchMode::Bidirectional] {
        let path = shortest_path(&graph, &0, &99, mode).expect("Grid corners are connected");
        assert_eq!(path.weight(), 18, "Manhattan distance between opposite corners");
        assert_eq!(path.len(), 19);
        assert_valid_path(&graph, &path, &0, &99);
    }
}

#[test]
fn test_random_graphs_vanilla_and_bidirectional_agree() {
    for seed in 0..40u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = generate_random(&mut rng, 30, 2.5, 1, 20);

        for _ in 0..10 {
            let start = rng.gen_range(0..30);
            let end = rng.gen_range(0..30);

            let vanilla = shortest_path(&graph, &start, &end, SearchMode::Vanilla);
            let bidirectional = shortest_path(&graph, &start, &end, SearchMode::Bidirectional);

            match (&vanilla, &bidirectional) {
                (Some(v), Some(b)) => {
                    assert_eq!(v.weight(), b.weight(), "seed {} query {} -> {}", seed, start, end);
                    assert_valid_path(&graph, v, &start, &end);
                    assert_valid_path(&graph, b, &start, &end);
                }
                (None, None) => {}
                _ => panic!("engines disagree on reachability, seed {} query {} -> {}", seed, start, end),
            }
        }
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Sums the graph's edge weights along the path, front to back
fn summed_weight(graph: &DirectedGraph<usize, OrderedFloat<f64>>, nodes: &[usize]) -> f64 {
    nodes
        .windows(2)
        .map(|pair| {
            graph
                .edge_weight(&pair[0], &pair[1])
                .unwrap_or_else(|| panic!("Path uses a missing edge {} -> {}", pair[0], pair[1]))
                .into_inner()
        })
        .sum()
}

#[test]
fn test_random_float_graphs_vanilla_and_bidirectional_agree() {
    for seed in 0..500u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = DirectedGraph::new();
        for node in 0..20usize {
            graph.add_node(node);
        }
        for _ in 0..60 {
            let from = rng.gen_range(0..20usize);
            let to = rng.gen_range(0..20usize);
            if from != to {
                graph.add_edge(from, to, OrderedFloat(rng.gen::<f64>()));
            }
        }

        let vanilla = shortest_path(&graph, &0, &19, SearchMode::Vanilla);
        let bidirectional = shortest_path(&graph, &0, &19, SearchMode::Bidirectional);

        match (&vanilla, &bidirectional) {
            (Some(v), Some(b)) => {
                let (v_weight, b_weight) = (v.weight().into_inner(), b.weight().into_inner());
                assert!(close(v_weight, b_weight), "seed {}: {} vs {}", seed, v_weight, b_weight);
                for path in [v, b] {
                    assert!(path.is_loopless());
                    assert_eq!(path.start(), &0);
                    assert_eq!(path.end(), &19);
                    let summed = summed_weight(&graph, &path.node_sequence());
                    assert!(close(summed, path.weight().into_inner()), "seed {}: {:?}", seed, path);
                }
            }
            (None, None) => {}
            _ => panic!("engines disagree on reachability, seed {}", seed),
        }
    }
}

#[test]
fn test_batch_matches_individual_queries() {
    let mut rng = StdRng::seed_from_u64(7);
    let graph = generate_random(&mut rng, 40, 3.0, 1, 9);
    let queries: Vec<(usize, usize)> = (0..25).map(|i| (i, (i * 7 + 3) % 40)).collect();

    let batch = shortest_paths_batch(&graph, &queries, SearchMode::Bidirectional);

    assert_eq!(batch.len(), queries.len());
    for ((start, end), result) in queries.iter().zip(&batch) {
        let single = shortest_path(&graph, start, end, SearchMode::Vanilla);
        assert_eq!(
            single.as_ref().map(|p| p.weight()),
            result.as_ref().map(|p| p.weight()),
            "query {} -> {}",
            start,
            end
        );
    }
}

#[test]
fn test_graph_counts() {
    let graph = routing_graph();
    assert_eq!(graph.node_count(), 10);
    assert_eq!(graph.edge_count(), 11);
    assert!(graph.has_node(&"U"));
    assert!(graph.validate_non_negative());
}
