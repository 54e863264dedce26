/*!
Single-source depth-first paths.

[`DepthFirstPaths`] runs one depth-first search from a source node when it is
constructed and keeps the resulting visited set and predecessor array. Afterwards
it answers reachability and path queries without touching the graph again.

The search uses an explicit stack of `(node, remaining neighbors)` frames instead
of recursion, so its depth is only bounded by memory. Neighbors are examined in
the order the graph yields them, which makes the recorded predecessors identical
to those of the classic recursive formulation:

```text
dfs(u):
    mark u
    for v in neighbors(u):
        if v is unmarked:
            predecessor[v] = u
            dfs(v)
```
*/

use std::iter::FusedIterator;

use itertools::Itertools;
use stream_bitset::prelude::*;
use tracing::{debug, trace};

use super::*;

/// Reachability and path index from a single source node.
///
/// Built once by [`DepthFirstPaths::new`]; all queries take `&self` and never
/// mutate, so a constructed instance can be shared between threads.
///
/// The recorded path to a node is *a* path, not necessarily a shortest one. Which
/// path is found depends on the adjacency order of the graph.
///
/// # Examples
/// ```
/// use dfpaths::{prelude::*, algo::*};
///
/// let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (0, 2), (3, 4)]);
/// let paths = DepthFirstPaths::new(&g, 0).unwrap();
///
/// assert!(paths.has_path_to(2).unwrap());
/// assert_eq!(paths.path_to(2).unwrap(), Some(vec![0, 1, 2]));
/// assert_eq!(paths.path_to(4).unwrap(), None);
/// assert!(paths.path_to(5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    source: Node,
    visited: NodeBitSet,
    /// `predecessor[v]` is the node from which `v` was first discovered;
    /// `INVALID_NODE` for the source and for unreached nodes.
    predecessor: Vec<Node>,
}

impl DepthFirstPaths {
    /// Runs a depth-first search on `graph` starting at `source`.
    ///
    /// Takes `O(n + m)` time and `O(n)` additional space.
    ///
    /// # Errors
    /// Returns [`PathError::InvalidVertex`] if `source >= graph.number_of_nodes()`.
    pub fn new<G: AdjacencyList>(graph: &G, source: Node) -> Result<Self> {
        let n = graph.number_of_nodes();
        validate_vertex(n, source)?;

        debug!(source, nodes = n, "depth-first search started");

        let mut visited = graph.vertex_bitset_unset();
        let mut predecessor = vec![INVALID_NODE; n as usize];

        visited.set_bit(source);
        let mut stack = vec![(source, graph.neighbors_of(source))];

        while let Some((u, neighbors)) = stack.last_mut() {
            let u = *u;
            match neighbors.find(|&v| !visited.get_bit(v)) {
                Some(v) => {
                    trace!(node = v, predecessor = u, "discovered");
                    predecessor[v as usize] = u;
                    visited.set_bit(v);
                    stack.push((v, graph.neighbors_of(v)));
                }
                // all neighbors of `u` are done; backtrack
                None => {
                    stack.pop();
                }
            }
        }

        let paths = Self {
            source,
            visited,
            predecessor,
        };

        debug!(
            source,
            reachable = paths.number_of_reachable(),
            "depth-first search finished"
        );

        Ok(paths)
    }

    /// Returns the source node of the search
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the number of nodes of the searched graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.predecessor.len() as NumNodes
    }

    /// Returns the number of nodes reachable from the source (including the source)
    pub fn number_of_reachable(&self) -> NumNodes {
        self.visited.cardinality()
    }

    /// Returns an iterator over all nodes reachable from the source in ascending order
    pub fn reachable(&self) -> impl Iterator<Item = Node> + '_ {
        self.visited.iter_set_bits()
    }

    /// Returns *true* iff there is a path from the source to `v`. Runs in constant time.
    ///
    /// # Errors
    /// Returns [`PathError::InvalidVertex`] if `v` is not a node of the graph.
    pub fn has_path_to(&self, v: Node) -> Result<bool> {
        validate_vertex(self.number_of_nodes(), v)?;
        Ok(self.visited.get_bit(v))
    }

    /// Returns the node from which `v` was discovered, or `None` if `v` is the
    /// source or unreachable.
    ///
    /// # Errors
    /// Returns [`PathError::InvalidVertex`] if `v` is not a node of the graph.
    pub fn predecessor_of(&self, v: Node) -> Result<Option<Node>> {
        validate_vertex(self.number_of_nodes(), v)?;
        Ok(valid_node(self.predecessor[v as usize]))
    }

    /// Returns a path `source, ..., v` or `None` if `v` is unreachable.
    ///
    /// The path contains no node twice and each pair of consecutive nodes is an edge
    /// of the graph. The returned vector is a fresh copy. Runs in time proportional
    /// to the length of the path.
    ///
    /// # Errors
    /// Returns [`PathError::InvalidVertex`] if `v` is not a node of the graph.
    ///
    /// # Examples
    /// ```
    /// use dfpaths::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2)]);
    /// let paths = g.depth_first_paths(2).unwrap();
    ///
    /// assert_eq!(paths.path_to(0).unwrap(), Some(vec![2, 1, 0]));
    /// assert_eq!(paths.path_to(2).unwrap(), Some(vec![2]));
    /// ```
    pub fn path_to(&self, v: Node) -> Result<Option<Vec<Node>>> {
        if !self.has_path_to(v)? {
            return Ok(None);
        }

        let mut path = self.path_iter_to(v)?.collect_vec();
        path.reverse();
        Ok(Some(path))
    }

    /// Returns an iterator walking the recorded path backwards, i.e. yielding
    /// `v, predecessor(v), ..., source`. The iterator is empty if `v` is unreachable.
    ///
    /// # Errors
    /// Returns [`PathError::InvalidVertex`] if `v` is not a node of the graph.
    pub fn path_iter_to(&self, v: Node) -> Result<PathIter<'_>> {
        let next = self.has_path_to(v)?.then_some(v);
        Ok(PathIter {
            predecessor: &self.predecessor,
            next,
        })
    }
}

/// Iterator over a recorded path from its target back to the source.
///
/// Created by [`DepthFirstPaths::path_iter_to`].
#[derive(Debug, Clone)]
pub struct PathIter<'a> {
    predecessor: &'a [Node],
    next: Option<Node>,
}

impl Iterator for PathIter<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.next?;
        self.next = valid_node(self.predecessor[u as usize]);
        Some(u)
    }
}

impl FusedIterator for PathIter<'_> {}
