use colored::*;
use kshortest::graph::{Graph, MutableGraph};
use kshortest::{shortest_path, DirectedGraph, PathSearch, SearchMode, Yen};
use ordered_float::OrderedFloat;

fn main() {
    // A small road network with a few competing routes
    let mut graph = DirectedGraph::new();
    graph.add_edge("depot", "north", OrderedFloat(4.0));
    graph.add_edge("depot", "south", OrderedFloat(2.0));
    graph.add_edge("south", "north", OrderedFloat(1.0));
    graph.add_edge("north", "bridge", OrderedFloat(5.0));
    graph.add_edge("south", "ferry", OrderedFloat(8.0));
    graph.add_edge("south", "bridge", OrderedFloat(10.0));
    graph.add_edge("bridge", "harbour", OrderedFloat(3.0));
    graph.add_edge("ferry", "harbour", OrderedFloat(1.0));
    graph.add_edge("north", "harbour", OrderedFloat(11.0));
    graph.add_node("island");

    println!("{}", "--- k-shortest paths demo ---".bold());
    println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

    for mode in [SearchMode::Vanilla, SearchMode::Bidirectional] {
        let name = <SearchMode as PathSearch<&str, OrderedFloat<f64>, DirectedGraph<&str, OrderedFloat<f64>>>>::name(&mode);
        match shortest_path(&graph, &"depot", &"harbour", mode) {
            Some(path) => println!("{:>24}: {}", name.cyan(), path.to_string().green()),
            None => println!("{:>24}: {}", name.cyan(), "no path".red()),
        }
    }

    let k = 5;
    println!("\n{}", format!("Up to {} routes from depot to harbour:", k).bold());
    let paths = Yen::new(SearchMode::Bidirectional).k_shortest_paths(&graph, &"depot", &"harbour", k);
    for (rank, path) in paths.iter().enumerate() {
        let line = format!("#{} {}", rank + 1, path);
        if rank == 0 {
            println!("  {}", line.green().bold());
        } else {
            println!("  {}", line);
        }
    }
    if paths.len() < k {
        println!("  {}", format!("only {} loopless routes exist", paths.len()).yellow());
    }

    match shortest_path(&graph, &"depot", &"island", SearchMode::Bidirectional) {
        Some(path) => println!("\nisland: {}", path),
        None => println!("\n{}", "island is unreachable".red()),
    }
}
