//! dfpaths - print depth-first paths from a source node of a graph file

mod cli;

use std::{
    io::{BufWriter, Write},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use tracing::debug;

use cli::{Cli, Section};
use dfpaths::{
    algo::Traversal,
    error::checked_vertex,
    io::{Algs4Reader, GraphReader},
    logging,
    prelude::*,
    report::{AdjacencyReport, PathsReport, TraversalStateReport},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut graph: AdjArrayUndir = Algs4Reader::new()
        .neighbor_order(cli.order.into())
        .try_read_graph_file(&cli.graph)
        .with_context(|| format!("failed to read graph from {}", cli.graph.display()))?;

    if cli.canonical {
        graph.canonicalize();
    }

    debug!(
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "graph loaded"
    );

    let source = checked_vertex(graph.number_of_nodes(), cli.source)?;
    let paths = graph.depth_first_paths(source)?;

    let mut out = BufWriter::new(std::io::stdout().lock());
    for (i, section) in cli.show.iter().unique().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        match section {
            Section::Adjacency => {
                writeln!(out, "Adjacency List:")?;
                writeln!(out, "---------------")?;
                write!(out, "{}", AdjacencyReport(&graph))?;
            }
            Section::State => write!(out, "{}", TraversalStateReport(&paths))?,
            Section::Paths => {
                writeln!(out, "Paths:")?;
                write!(out, "{}", PathsReport(&paths))?;
            }
        }
    }
    out.flush()?;

    Ok(())
}
