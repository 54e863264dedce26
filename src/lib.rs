/*!
`dfpaths` finds paths in **u**nlabelled, **u**nweighted, **u**ndirected graphs using
depth-first search.

From a single source node, one traversal discovers every reachable node and records
*one* path to it (not necessarily a shortest one). Afterwards, reachability and path
queries are answered from the precomputed state.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Graphs are accessed through the traits in [`ops`]; [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
is the provided representation. The order in which a graph yields neighbors determines
which path is recorded when several exist; see [`repr::NeighborOrder`] and
[`repr::UndirectedGraph::canonicalize`].

# Usage

```
use dfpaths::{prelude::*, algo::*};

//  0 - 1 - 2    3
let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2)]);
let paths = g.depth_first_paths(0).unwrap();

assert!(paths.has_path_to(2).unwrap());
assert_eq!(paths.path_to(2).unwrap(), Some(vec![0, 1, 2]));
assert_eq!(paths.path_to(3).unwrap(), None);
assert!(matches!(paths.path_to(4), Err(PathError::InvalidVertex { .. })));
```

The submodules are:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, graph representations and the error type,
- [`algo`] includes [`DepthFirstPaths`](crate::algo::DepthFirstPaths) and the [`Traversal`](crate::algo::Traversal) trait,
- [`io`] includes a reader and writer for the Algs4 text format,
- [`report`] includes plain-text views of graphs and search results.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod logging;
pub mod node;
pub mod ops;
pub mod report;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `dfpaths::prelude` includes definitions for nodes and edges, all basic graph operation traits,
/// the implemented representations and [`PathError`](crate::error::PathError).
pub mod prelude {
    pub use super::{edge::*, error::PathError, node::*, ops::*, repr::*};
}
