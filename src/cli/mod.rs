//! CLI argument parsing for waypath
//!
//! Uses clap for argument parsing.
//! Supports global flags: --graph, --config, --format, --quiet, --verbose

pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use waypath_core::format::OutputFormat;
use parse::parse_output_format;

/// Waypath - breadth-first search and shortest paths over graph files
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file (.json, .toml, .yaml or .yml)
    #[arg(long, short, global = true, env = "WAYPATH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. "debug" or "waypath_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the nearest node named TARGET, searching outward from START
    Search {
        /// Node to search from (never matches itself)
        start: String,

        /// Name of the node to look for
        #[arg(long, short)]
        target: String,

        /// Print the hop path instead of just the match
        #[arg(long)]
        path: bool,
    },

    /// Compute weighted shortest paths from START
    Shortest {
        /// Node to measure from
        start: String,

        /// Only report the path to this node
        #[arg(long)]
        to: Option<String>,
    },

    /// List the outgoing edges of a node
    Neighbors {
        /// Node to inspect
        node: String,
    },

    /// Summarize the graph
    Info,
}
