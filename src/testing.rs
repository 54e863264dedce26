//! Helpers shared by unit tests: reference graphs, random graphs and independent
//! reference implementations to compare traversal results against.

use std::collections::VecDeque;

use rand::Rng;

use crate::prelude::*;

/// The edges of `tinyCG.txt` in file order
pub const TINY_CG_EDGES: [(Node, Node); 8] = [
    (0, 5),
    (2, 4),
    (2, 3),
    (1, 2),
    (0, 1),
    (3, 4),
    (3, 5),
    (0, 2),
];

/// Loads `tinyCG` like the textbook loader does, yielding the adjacency
/// `0: 2 1 5 | 1: 0 2 | 2: 0 1 3 4 | 3: 5 4 2 | 4: 3 2 | 5: 3 0`
pub fn tiny_cg() -> AdjArrayUndir {
    let mut graph = AdjArrayUndir::with_neighbor_order(6, NeighborOrder::Prepend);
    graph.add_edges(TINY_CG_EDGES);
    graph
}

/// Creates a graph with `n` nodes and `m` uniformly drawn edges
/// (loops and parallel edges included)
pub fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> AdjArrayUndir {
    assert!(n > 0);
    let edges = (0..m)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect::<Vec<_>>();
    AdjArrayUndir::from_edges(n, edges)
}

/// Breadth-first reachability, independent of the depth-first implementation
pub fn bfs_reachable<G: AdjacencyList>(graph: &G, source: Node) -> Vec<bool> {
    let mut reached = vec![false; graph.len()];
    let mut queue = VecDeque::from([source]);
    reached[source as usize] = true;

    while let Some(u) = queue.pop_front() {
        for v in graph.neighbors_of(u) {
            if !reached[v as usize] {
                reached[v as usize] = true;
                queue.push_back(v);
            }
        }
    }

    reached
}

/// Textbook recursive depth-first search returning the predecessor array
/// (`INVALID_NODE` for the source and unreached nodes)
pub fn recursive_predecessors<G: AdjacencyList>(graph: &G, source: Node) -> Vec<Node> {
    fn visit<G: AdjacencyList>(graph: &G, u: Node, marked: &mut [bool], pred: &mut [Node]) {
        marked[u as usize] = true;
        for v in graph.neighbors_of(u) {
            if !marked[v as usize] {
                pred[v as usize] = u;
                visit(graph, v, marked, pred);
            }
        }
    }

    let mut marked = vec![false; graph.len()];
    let mut pred = vec![INVALID_NODE; graph.len()];
    visit(graph, source, &mut marked, &mut pred);
    pred
}
