//! vcover Command-Line Interface
//!
//! Generate small weighted graphs, find their minimum vertex cover by
//! exhaustive search, and check answers produced by other solvers against
//! that optimum.
//!
//! ```text
//! vcover generate -n 6 -p 0.4 -s 10598 -o graph.txt
//! vcover solve -i graph.txt
//! vcover check -i graph.txt -a 011010
//! vcover decode -i graph.txt --counts counts.json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::common::GraphArgs;
use commands::{check, decode, generate, solve, version};
use config::Config;

/// vcover - exact minimum vertex cover for small graphs
#[derive(Parser, Debug)]
#[command(name = "vcover")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML)
    #[arg(long, global = true, env = "VCOVER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random graph in G-set format
    Generate {
        #[command(flatten)]
        graph: GraphArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Find a minimum vertex cover by brute force
    Solve {
        /// Input graph (G-set, or JSON rows for .json); random if omitted
        #[arg(short, long)]
        input: Option<String>,

        #[command(flatten)]
        graph: GraphArgs,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Refuse graphs with more nodes than this
        #[arg(long, env = "VCOVER_MAX_NODES")]
        max_nodes: Option<usize>,
    },

    /// Check a candidate cover against the optimum
    Check {
        /// Input graph (G-set, or JSON rows for .json)
        #[arg(short, long)]
        input: String,

        /// Candidate assignment as a 0/1 string, vertex 0 first
        #[arg(short, long)]
        assignment: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Refuse graphs with more nodes than this
        #[arg(long, env = "VCOVER_MAX_NODES")]
        max_nodes: Option<usize>,
    },

    /// Decode an external solver's output and check it
    Decode {
        /// Input graph (G-set, or JSON rows for .json)
        #[arg(short, long)]
        input: String,

        /// JSON object of bitstring shot counts (rightmost bit is qubit 0)
        #[arg(long, conflicts_with = "probabilities")]
        counts: Option<String>,

        /// JSON array of basis-state probabilities
        #[arg(long)]
        probabilities: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Refuse graphs with more nodes than this
        #[arg(long, env = "VCOVER_MAX_NODES")]
        max_nodes: Option<usize>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = Config::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Generate { graph, output } => {
            generate::execute(&graph, output.as_deref(), &config)
        }

        Commands::Solve {
            input,
            graph,
            format,
            max_nodes,
        } => solve::execute(input.as_deref(), &graph, &format, max_nodes, &config),

        Commands::Check {
            input,
            assignment,
            format,
            max_nodes,
        } => check::execute(&input, &assignment, &format, max_nodes, &config),

        Commands::Decode {
            input,
            counts,
            probabilities,
            format,
            max_nodes,
        } => decode::execute(
            &input,
            counts.as_deref(),
            probabilities.as_deref(),
            &format,
            max_nodes,
            &config,
        ),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    });

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
