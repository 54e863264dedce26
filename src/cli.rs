use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dfpaths::repr::NeighborOrder;

/// Find depth-first paths from a source node in an undirected graph
#[derive(Debug, Parser)]
#[command(name = "dfpaths", version, about)]
pub struct Cli {
    /// Graph file in Algs4 format (`V`, `E`, then `E` pairs `v w`)
    pub graph: PathBuf,

    /// Source node of the search
    #[arg(allow_negative_numbers = true)]
    pub source: i64,

    /// Where the loader places a new neighbor within a neighborhood
    #[arg(long, value_enum, default_value_t = OrderArg::Prepend)]
    pub order: OrderArg,

    /// Sort all neighborhoods before searching
    #[arg(long)]
    pub canonical: bool,

    /// Sections to print, in order
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [Section::Adjacency, Section::State, Section::Paths]
    )]
    pub show: Vec<Section>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace` or `dfpaths=debug`)
    #[arg(long, env = "DFPATHS_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Newest neighbor first, like the textbook loader
    Prepend,
    /// Neighbors in file order
    Append,
}

impl From<OrderArg> for NeighborOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Prepend => NeighborOrder::Prepend,
            OrderArg::Append => NeighborOrder::Append,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum)]
pub enum Section {
    /// Adjacency list of the graph
    Adjacency,
    /// Marked flags and predecessors of the search
    State,
    /// Path (or "not connected") for every node
    Paths,
}
