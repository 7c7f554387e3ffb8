//! Command dispatch logic for waypath
use std::time::Instant;

use waypath_core::config::Config;
use waypath_core::error::Result;
use waypath_core::graph::io::load_graph;
use waypath_core::graph::Graph;
use waypath_core::{bail_usage, trace_time};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;

/// Everything a command needs once the graph is loaded
pub struct Context<'a> {
    pub graph: Graph,
    pub config: &'a Config,
    pub format: OutputFormat,
    pub quiet: bool,
}

pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    let Some(command) = &cli.command else {
        return handle_no_command();
    };

    let Some(graph_path) = &cli.graph else {
        bail_usage!("no graph file given (use --graph or WAYPATH_GRAPH)");
    };

    let graph = load_graph(graph_path)?;
    trace_time!(
        start,
        "load_graph",
        nodes = graph.node_count(),
        edges = graph.edge_count()
    );

    let ctx = Context {
        graph,
        config,
        format,
        quiet: cli.quiet,
    };

    let result = match command {
        Commands::Search {
            start: from,
            target,
            path,
        } => commands::search::execute(&ctx, from, target, *path),

        Commands::Shortest { start: from, to } => {
            commands::shortest::execute(&ctx, from, to.as_deref())
        }

        Commands::Neighbors { node } => commands::neighbors::execute(&ctx, node),

        Commands::Info => commands::info::execute(&ctx),
    };

    trace_time!(start, "execute_command");
    result
}

fn handle_no_command() -> Result<()> {
    println!("waypath {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Breadth-first search and shortest paths over graph files.");
    println!();
    println!("Run `waypath --help` for usage information.");
    Ok(())
}
