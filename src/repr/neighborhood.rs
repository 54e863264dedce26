use itertools::Either;

use super::*;

/// A neighborhood stored as an array of nodes in insertion order.
///
/// Parallel edges and loops are kept, so a node may occur multiple times.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl ArrNeighborhood {
    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Adds a neighbor without checking if this neighbor exists beforehand
    pub fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    /// Returns an iterator over all neighbors in the given order
    pub fn neighbors(&self, order: NeighborOrder) -> impl Iterator<Item = Node> + '_ {
        match order {
            NeighborOrder::Append => Either::Left(self.0.iter().copied()),
            NeighborOrder::Prepend => Either::Right(self.0.iter().rev().copied()),
        }
    }

    /// Sorts the neighborhood in ascending order
    pub fn sort(&mut self) {
        self.0.sort_unstable();
    }

    /// Returns a slice-reference in insertion order
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }
}
