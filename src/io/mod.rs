/*!
# IO

Utilities for reading and writing graphs from and to text.

Currently supported format:
- **Algs4**: the textbook graph format. The first token is the number of nodes `V`,
  the second the number of edges `E`, followed by `E` pairs `v w`. Tokens are
  whitespace separated and may be spread over lines arbitrarily.

## Traits

To generalize over formats:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`Algs4Read`] and [`Algs4Write`] are shorthands using default settings.

All functions report malformed input as [`std::io::Error`] of kind
[`ErrorKind::InvalidData`].
*/

pub mod algs4;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use algs4::*;

/// Trait for reading a graph in a specific format
pub trait GraphReader<G> {
    /// Tries to read the graph from a given reader
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Tries to read the graph from a given file
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for writing a graph in a specific format
pub trait GraphWriter<G> {
    /// Tries to write the graph to a given writer
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a given file
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next().transpose()?;
        let Some(token) = next else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of input when parsing {}.", $name)
            ));
        };

        match token.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value {:?} found. Cannot parse {}.", token, $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
