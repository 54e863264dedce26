/*!
Traversal methods exposed directly on graphs.

Implemented for every [`AdjacencyList`], so `use dfpaths::algo::*;` is enough to
call `graph.depth_first_paths(source)`.
*/

use super::*;

/// Provides convenient traversal methods on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Runs a depth-first search from `source` and returns the resulting path index.
    ///
    /// # Examples
    /// ```
    /// use dfpaths::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2)]);
    ///
    /// let paths = g.depth_first_paths(0).unwrap();
    /// assert_eq!(paths.reachable().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    fn depth_first_paths(&self, source: Node) -> Result<DepthFirstPaths> {
        DepthFirstPaths::new(self, source)
    }

    /// Returns *true* if there exists a path between `source` and `target`.
    ///
    /// Both nodes are validated before any search is performed.
    ///
    /// # Examples
    /// ```
    /// use dfpaths::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2)]);
    ///
    /// assert!(g.is_reachable(2, 0).unwrap());
    /// assert!(!g.is_reachable(0, 3).unwrap());
    /// assert!(g.is_reachable(0, 4).is_err());
    /// ```
    fn is_reachable(&self, source: Node, target: Node) -> Result<bool> {
        validate_vertex(self.number_of_nodes(), target)?;
        self.depth_first_paths(source)?.has_path_to(target)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
