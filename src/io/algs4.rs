//! # Algs4
//!
//! The Algs4-Format starts with the number of nodes `V` and the number of edges `E`,
//! followed by `E` pairs `v w` representing the undirected edge `{v, w}` (0-indexed):
//! ```text
//! 6
//! 8
//! 0 5
//! 2 4
//! ...
//! ```
//! Tokens are separated by arbitrary whitespace, including line breaks. Anything
//! after the `E`-th edge is ignored.

use std::{
    io::Lines,
    vec::IntoIter,
};

use tracing::debug;

use super::*;
use crate::error::checked_vertex;

/// A GraphReader for the Algs4-Format
#[derive(Debug, Clone)]
pub struct Algs4Reader {
    /// Placement of new neighbors while inserting edges in file order
    order: NeighborOrder,
}

impl Default for Algs4Reader {
    /// Defaults to [`NeighborOrder::Prepend`], i.e. the adjacency produced by the
    /// textbook loader which stores neighborhoods in a bag
    fn default() -> Self {
        Self {
            order: NeighborOrder::Prepend,
        }
    }
}

impl Algs4Reader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the order in which neighbors are stored
    pub fn neighbor_order(mut self, order: NeighborOrder) -> Self {
        self.order = order;
        self
    }
}

impl GraphReader<AdjArrayUndir> for Algs4Reader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<AdjArrayUndir> {
        let mut tokens = Tokens::new(reader);

        let n: i64 = parse_next_value!(tokens, "Header>Number of nodes");
        let n = NumNodes::try_from(n)
            .map_err(|_| io_error!(ErrorKind::InvalidData, format!("Invalid number of nodes {n}")))?;

        let m: i64 = parse_next_value!(tokens, "Header>Number of edges");
        raise_error_unless!(
            m >= 0 && m <= i64::from(NumEdges::MAX),
            ErrorKind::InvalidData,
            format!("Invalid number of edges {m}")
        );

        debug!(nodes = n, edges = m, order = ?self.order, "reading algs4 graph");

        let mut graph = AdjArrayUndir::with_neighbor_order(n, self.order);
        for _ in 0..m {
            let u: i64 = parse_next_value!(tokens, "Source node");
            let v: i64 = parse_next_value!(tokens, "Target node");

            let u = checked_vertex(n, u).map_err(|e| io_error!(ErrorKind::InvalidData, e))?;
            let v = checked_vertex(n, v).map_err(|e| io_error!(ErrorKind::InvalidData, e))?;

            graph.add_edge(u, v);
        }

        Ok(graph)
    }
}

/// Trait for creating graphs with a default [`Algs4Reader`]
pub trait Algs4Read: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_algs4<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_algs4_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_algs4(BufReader::new(File::open(path)?))
    }
}

impl Algs4Read for AdjArrayUndir {
    fn try_read_algs4<R: BufRead>(reader: R) -> Result<Self> {
        Algs4Reader::default().try_read_graph(reader)
    }
}

/// Whitespace separated tokens of a reader, spanning line breaks
struct Tokens<R> {
    lines: Lines<R>,
    current: IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            current: Vec::new().into_iter(),
        }
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.current.next() {
                return Some(Ok(token));
            }

            match self.lines.next()? {
                Ok(line) => {
                    self.current = line
                        .split_whitespace()
                        .map(String::from)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// A writer for the Algs4-Format.
///
/// Edges are written once each, normalized and ordered by their smaller endpoint.
#[derive(Debug, Clone, Default)]
pub struct Algs4Writer;

impl Algs4Writer {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for Algs4Writer {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;
        writeln!(writer, "{}", graph.number_of_edges())?;

        for u in graph.vertices() {
            // a loop is stored twice in the neighborhood of its node
            let mut loops = 0;
            for v in graph.neighbors_of(u) {
                if u < v {
                    writeln!(writer, "{u} {v}")?;
                } else if u == v {
                    loops += 1;
                    if loops % 2 == 0 {
                        writeln!(writer, "{u} {v}")?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the Algs4-Format.
/// Shorthand for default settings.
pub trait Algs4Write {
    /// Tries to write the graph to a writer
    fn try_write_algs4<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_algs4_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_algs4(&mut writer)?;
        writer.flush()
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> Algs4Write for G {
    fn try_write_algs4<W: Write>(&self, writer: W) -> Result<()> {
        Algs4Writer.try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    const TINY_CG: &str = "6\n8\n0 5\n2 4\n2 3\n1 2\n0 1\n3 4\n3 5\n0 2\n";

    fn read(input: &str) -> Result<AdjArrayUndir> {
        AdjArrayUndir::try_read_algs4(input.as_bytes())
    }

    fn expect_invalid_data(input: &str) -> String {
        let err = read(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData, "{err}");
        err.to_string()
    }

    #[test]
    fn read_tiny_cg() {
        let graph = read(TINY_CG).unwrap();

        assert_eq!(graph.number_of_nodes(), 6);
        assert_eq!(graph.number_of_edges(), 8);
        assert_eq!(graph.neighbor_order(), NeighborOrder::Prepend);

        let adjacency = graph.vertices().map(|u| graph.neighbors_of(u).collect_vec()).collect_vec();
        assert_eq!(
            adjacency,
            vec![
                vec![2, 1, 5],
                vec![0, 2],
                vec![0, 1, 3, 4],
                vec![5, 4, 2],
                vec![3, 2],
                vec![3, 0],
            ]
        );
    }

    #[test]
    fn read_append_order() {
        let graph: AdjArrayUndir = Algs4Reader::new()
            .neighbor_order(NeighborOrder::Append)
            .try_read_graph(TINY_CG.as_bytes())
            .unwrap();

        assert_eq!(graph.neighbors_of(0).collect_vec(), [5, 1, 2]);
    }

    #[test]
    fn tokens_span_lines() {
        let graph = read("  3 2 0\n1\n\n   1   2  trailing garbage").unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.neighbors_of(1).collect_vec(), [2, 0]);
    }

    #[test]
    fn empty_graph() {
        let graph = read("0\n0\n").unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn invalid_input() {
        assert!(expect_invalid_data("").contains("Number of nodes"));
        assert!(expect_invalid_data("5").contains("Number of edges"));
        assert!(expect_invalid_data("-1\n0\n").contains("number of nodes"));
        assert!(expect_invalid_data("3\n-2\n").contains("number of edges"));
        assert!(expect_invalid_data("x\n1\n").contains("\"x\""));
        assert!(expect_invalid_data("3\n2\n0 1\n").contains("Premature end"));
        assert!(expect_invalid_data("3\n1\n0\n").contains("Target node"));
        assert_eq!(
            expect_invalid_data("3\n1\n0 3\n"),
            "vertex 3 is not between 0 and 2"
        );
        assert_eq!(
            expect_invalid_data("3\n1\n-1 2\n"),
            "vertex -1 is not between 0 and 2"
        );
    }

    #[test]
    fn write_edges_once() {
        let graph = AdjArrayUndir::from_edges(3, [(1, 0), (2, 2), (1, 2), (0, 1)]);

        let mut buffer = Vec::new();
        graph.try_write_algs4(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text, "3\n4\n0 1\n0 1\n1 2\n2 2\n");

        let reread = read(&text).unwrap().canonicalized();
        assert_eq!(reread, graph.canonicalized());
    }

    #[test]
    fn write_and_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.txt");

        let graph = read(TINY_CG).unwrap();
        graph.try_write_algs4_file(&path).unwrap();

        let reread = AdjArrayUndir::try_read_algs4_file(&path).unwrap();
        assert_eq!(reread.number_of_edges(), 8);
        assert_eq!(reread.canonicalized(), graph.canonicalized());
    }
}
