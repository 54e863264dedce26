use super::*;

/// An undirected graph stored as an adjacency array.
///
/// Every edge `{u, v}` is recorded in the neighborhoods of both endpoints; a loop
/// `{v, v}` therefore appears twice in the neighborhood of `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    nbs: Vec<ArrNeighborhood>,
    num_edges: NumEdges,
    order: NeighborOrder,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph;

impl UndirectedGraph {
    /// Creates an empty graph with `n` nodes whose neighborhoods follow `order`
    pub fn with_neighbor_order(n: NumNodes, order: NeighborOrder) -> Self {
        Self {
            nbs: vec![ArrNeighborhood::default(); n as usize],
            num_edges: 0,
            order,
        }
    }

    /// Returns the order in which neighborhoods are yielded
    pub fn neighbor_order(&self) -> NeighborOrder {
        self.order
    }

    /// Sorts every neighborhood ascending, making traversals independent of the
    /// order in which edges were inserted.
    pub fn canonicalize(&mut self) {
        self.order = NeighborOrder::Append;
        for nbs in &mut self.nbs {
            nbs.sort();
        }
    }

    /// Returns the canonicalized graph
    pub fn canonicalized(mut self) -> Self {
        self.canonicalize();
        self
    }
}

impl GraphNodeOrder for UndirectedGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for UndirectedGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for UndirectedGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors(self.order)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl GraphNew for UndirectedGraph {
    fn new(n: NumNodes) -> Self {
        Self::with_neighbor_order(n, NeighborOrder::default())
    }
}

impl GraphEdgeEditing for UndirectedGraph {
    fn add_edge(&mut self, u: Node, v: Node) {
        let n = self.number_of_nodes();
        assert!(
            u < n && v < n,
            "edge {} out of range for {n} nodes",
            Edge(u, v)
        );

        self.nbs[u as usize].add_neighbor(v);
        self.nbs[v as usize].add_neighbor(u);
        self.num_edges += 1;
    }
}
