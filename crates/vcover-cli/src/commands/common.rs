//! Shared helpers for CLI commands.

use std::fmt::Display;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use vcover_core::{BruteForce, RandomGraph, WeightMatrix, gset};

use crate::config::Config;

/// Flags describing a random graph. Unset flags fall back to the config file.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct GraphArgs {
    /// Number of nodes
    #[arg(short, long, env = "VCOVER_NODES")]
    pub nodes: Option<usize>,

    /// Probability that two nodes are connected
    #[arg(short = 'p', long, env = "VCOVER_EDGE_PROB")]
    pub edge_prob: Option<f64>,

    /// Largest absolute edge weight
    #[arg(short, long, env = "VCOVER_WEIGHT_RANGE")]
    pub weight_range: Option<u32>,

    /// Allow negative edge weights
    #[arg(long)]
    pub negative_weight: bool,

    /// Random seed
    #[arg(short, long, env = "VCOVER_SEED")]
    pub seed: Option<u64>,
}

impl GraphArgs {
    /// Merge the flags over the configured defaults.
    pub fn resolve(&self, config: &Config) -> RandomGraph {
        let defaults = &config.graph;
        RandomGraph {
            n_nodes: self.nodes.unwrap_or(defaults.n_nodes),
            edge_probability: self.edge_prob.unwrap_or(defaults.edge_probability),
            weight_range: self.weight_range.unwrap_or(defaults.weight_range),
            negative_weight: self.negative_weight || defaults.negative_weight,
            seed: self.seed.unwrap_or(defaults.seed),
        }
    }
}

/// Build the solver from the `--max-nodes` flag or the config file.
pub fn solver(max_nodes: Option<usize>, config: &Config) -> BruteForce {
    BruteForce::new().with_max_nodes(max_nodes.unwrap_or(config.solver.max_nodes))
}

/// Load a graph from a G-set or JSON file.
///
/// Files ending in `.json` hold an array of matrix rows; anything else is
/// read as G-set.
pub fn load_graph(path: &str) -> Result<WeightMatrix> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "json" => WeightMatrix::from_json(&source)
            .with_context(|| format!("Invalid weight matrix in {path}")),
        _ => gset::parse(&source).with_context(|| format!("Invalid G-set file: {path}")),
    }
}

/// Load `input` if given, otherwise generate a random graph.
pub fn load_or_generate(
    input: Option<&str>,
    graph_args: &GraphArgs,
    config: &Config,
) -> Result<WeightMatrix> {
    match input {
        Some(path) => load_graph(path),
        None => {
            let params = graph_args.resolve(config);
            params
                .generate()
                .with_context(|| format!("Failed to generate random graph ({params:?})"))
        }
    }
}

/// Whether `format` selects JSON output.
pub fn is_json(format: &str) -> Result<bool> {
    match format.to_lowercase().as_str() {
        "json" => Ok(true),
        "table" | "text" => Ok(false),
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    }
}

/// Print a value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{json}");
    Ok(())
}

/// Create a progress bar over `len` candidates.
pub fn create_progress_bar(len: u64, message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    Ok(pb)
}

/// Print a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a graph's summary and edge list.
pub fn print_graph(graph: &WeightMatrix) {
    print_section("Graph");
    print_result("Nodes", graph.num_nodes());
    print_result("Edges", graph.num_edges());
    for (a, b, w) in graph.edges().take(32) {
        println!("    {a} -- {b} {}", style(format!("(weight: {w})")).dim());
    }
    if graph.num_edges() > 32 {
        println!("    ... and {} more edges", graph.num_edges() - 32);
    }
}
