/*!
# Reports

Plain-text views of a graph and of a [`DepthFirstPaths`] index, as printed by the
`dfpaths` binary. All reports implement [`Display`] and only read from their subject.

```
use dfpaths::{prelude::*, algo::*, report::*};

let g = AdjArrayUndir::from_edges(3, [(0, 1)]);
let paths = g.depth_first_paths(0).unwrap();

assert_eq!(
    PathsReport(&paths).to_string(),
    "0 to 0:  0\n0 to 1:  0-1\n0 to 2:  not connected\n"
);
```
*/

use std::fmt::{Display, Formatter, Result};

use itertools::Itertools;

use crate::{algo::DepthFirstPaths, prelude::*};

/// Lists the neighborhood of every node in adjacency order, one line per node:
/// `v: a->b->c`
pub struct AdjacencyReport<'a, G>(pub &'a G);

impl<G: AdjacencyList> Display for AdjacencyReport<'_, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let graph = self.0;
        for u in graph.vertices() {
            writeln!(f, "{u}: {}", graph.neighbors_of(u).join("->"))?;
        }
        Ok(())
    }
}

/// Shows the internal state of the search: whether each node was marked and the
/// node it was reached from (`-` if none)
pub struct TraversalStateReport<'a>(pub &'a DepthFirstPaths);

impl Display for TraversalStateReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let paths = self.0;
        writeln!(f, "marked   edgeTo")?;
        writeln!(f, "------   ------")?;

        for v in 0..paths.number_of_nodes() {
            // `v` is always in range here
            let marked = paths.has_path_to(v).unwrap_or(false);
            let edge_to = match paths.predecessor_of(v) {
                Ok(Some(u)) => u.to_string(),
                _ => "-".to_string(),
            };
            writeln!(f, "{marked:<10} {edge_to}")?;
        }
        Ok(())
    }
}

/// One line per node: `s to v:  s-a-v` or `s to v:  not connected`
pub struct PathsReport<'a>(pub &'a DepthFirstPaths);

impl Display for PathsReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let paths = self.0;
        let s = paths.source();

        for v in 0..paths.number_of_nodes() {
            match paths.path_to(v) {
                Ok(Some(path)) => writeln!(f, "{s} to {v}:  {}", path.iter().join("-"))?,
                _ => writeln!(f, "{s} to {v}:  not connected")?,
            }
        }
        Ok(())
    }
}
