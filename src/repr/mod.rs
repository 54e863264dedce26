/*!
# Graph Representations

Storage backends implementing the traits of [`crate::ops`].

Only an undirected adjacency array is provided; it keeps every neighborhood as a
contiguous `Vec<Node>` and remembers the order in which neighbors were inserted,
since the traversal result depends on that order.
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;

/// Defines where a newly inserted neighbor is placed within a neighborhood.
///
/// The order is observable through [`AdjacencyList::neighbors_of`] and hence decides
/// which path a depth-first traversal records when several exist.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NeighborOrder {
    /// New neighbors are yielded last (insertion order)
    #[default]
    Append,
    /// New neighbors are yielded first (reverse insertion order).
    /// This matches graph loaders that store adjacency in a stack-like bag.
    Prepend,
}
