//! Generate command implementation.
//!
//! Writes a seeded random graph in G-set format.

use anyhow::{Context, Result};
use console::style;

use vcover_core::gset;

use super::common::GraphArgs;
use crate::config::Config;

/// Execute the generate command.
pub fn execute(graph_args: &GraphArgs, output: Option<&str>, config: &Config) -> Result<()> {
    let params = graph_args.resolve(config);
    let graph = params
        .generate()
        .with_context(|| format!("Failed to generate random graph ({params:?})"))?;

    match output {
        Some(path) => {
            gset::write(&graph, path).with_context(|| format!("Failed to write {path}"))?;
            eprintln!(
                "{} Wrote {} nodes, {} edges (seed {}) to {}",
                style("✓").green().bold(),
                graph.num_nodes(),
                graph.num_edges(),
                params.seed,
                style(path).cyan()
            );
        }
        None => print!("{}", gset::to_string(&graph)),
    }

    Ok(())
}
