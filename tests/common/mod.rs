#![allow(dead_code)]

use kshortest::graph::{DirectedGraph, Graph, MutableGraph, NodeId, Weight};
use kshortest::Path;

/// Unit-weight graph shared by the single-path tests:
/// S->A, S->B, A->B, A->C, B->C, C->E, C->D, D->G, E->F, F->G, G->T, plus an isolated U
pub fn routing_graph() -> DirectedGraph<&'static str, u32> {
    let mut graph = DirectedGraph::from_edges(
        [
            ("S", "A"),
            ("S", "B"),
            ("A", "B"),
            ("A", "C"),
            ("B", "C"),
            ("C", "E"),
            ("C", "D"),
            ("D", "G"),
            ("E", "F"),
            ("F", "G"),
            ("G", "T"),
        ]
        .into_iter()
        .map(|(from, to)| (from, to, 1)),
    );
    graph.add_node("U");
    graph
}

/// Unit-weight graph shared by the enumeration tests:
/// S->A, A->B, A->C, B->D, D->C, C->E, C->G, E->F, E->G, F->G, G->T, plus an isolated U
pub fn deviation_graph() -> DirectedGraph<&'static str, u32> {
    let mut graph = DirectedGraph::from_edges(
        [
            ("S", "A"),
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("D", "C"),
            ("C", "E"),
            ("C", "G"),
            ("E", "F"),
            ("E", "G"),
            ("F", "G"),
            ("G", "T"),
        ]
        .into_iter()
        .map(|(from, to)| (from, to, 1)),
    );
    graph.add_node("U");
    graph
}

pub fn nodes_of<N: NodeId, W: Weight>(path: &Path<N, W>) -> Vec<N> {
    path.node_sequence()
}

/// Checks every structural invariant of a produced path against the graph it came from
pub fn assert_valid_path<N, W, G>(graph: &G, path: &Path<N, W>, start: &N, end: &N)
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    let elements = path.elements();
    assert!(!elements.is_empty(), "Path must not be empty");
    assert_eq!(&elements[0].node, start, "Path should start at source");
    assert_eq!(&elements[elements.len() - 1].node, end, "Path should end at target");
    assert_eq!(elements[0].weight, W::zero(), "First element must weigh zero");
    assert_eq!(path.weight(), elements[elements.len() - 1].weight, "Total weight is the last weight");
    assert!(path.is_loopless(), "Path must not repeat nodes: {:?}", path.node_sequence());

    for pair in elements.windows(2) {
        assert!(pair[0].weight <= pair[1].weight, "Weights must not decrease");
        let edge = graph
            .edge_weight(&pair[0].node, &pair[1].node)
            .unwrap_or_else(|| panic!("Path uses a missing edge {:?} -> {:?}", pair[0].node, pair[1].node));
        assert_eq!(pair[0].weight + edge, pair[1].weight, "Cumulative weight must follow edge weights");
    }
}

/// Every loopless path from `start` to `end`, by exhaustive depth-first search
pub fn all_simple_paths<N, W, G>(graph: &G, start: &N, end: &N) -> Vec<(Vec<N>, W)>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn walk<N, W, G>(graph: &G, end: &N, stack: &mut Vec<N>, weight: W, out: &mut Vec<(Vec<N>, W)>)
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        let current = stack[stack.len() - 1].clone();
        if &current == end {
            out.push((stack.clone(), weight));
            return;
        }
        for connection in graph.successors(&current) {
            if stack.contains(&connection.destination) {
                continue;
            }
            stack.push(connection.destination.clone());
            walk(graph, end, stack, weight + connection.weight, out);
            stack.pop();
        }
    }

    let mut out = Vec::new();
    let mut stack = vec![start.clone()];
    walk(graph, end, &mut stack, W::zero(), &mut out);
    out
}
