//! Decode command implementation.
//!
//! Reads the output of an external solver (a state-vector probability list
//! or a shot-count histogram), takes the most likely outcome as a candidate
//! cover, and verifies it against the brute-force optimum.

use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result};
use console::style;

use vcover_core::{Assignment, most_likely_from_counts, most_likely_from_probabilities};

use super::check::report;
use super::common::{is_json, load_graph, solver};
use crate::config::Config;

/// Where the solver output comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// JSON object mapping bitstrings to shot counts.
    Counts(&'a str),
    /// JSON array of basis-state probabilities.
    Probabilities(&'a str),
}

/// Decode the most likely assignment from a solver output file.
pub fn decode_file(source: Source<'_>, n_nodes: usize) -> Result<Assignment> {
    match source {
        Source::Counts(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read counts file: {path}"))?;
            let counts: BTreeMap<String, u64> = serde_json::from_str(&text)
                .with_context(|| format!("Counts file {path} must map bitstrings to integers"))?;
            let assignment = most_likely_from_counts(&counts)?;
            if assignment.len() != n_nodes {
                anyhow::bail!(
                    "Counts use {}-bit strings but the graph has {n_nodes} nodes",
                    assignment.len()
                );
            }
            Ok(assignment)
        }
        Source::Probabilities(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read probabilities file: {path}"))?;
            let probs: Vec<f64> = serde_json::from_str(&text)
                .with_context(|| format!("Probabilities file {path} must be a JSON array"))?;
            Ok(most_likely_from_probabilities(&probs, n_nodes)?)
        }
    }
}

/// Execute the decode command.
pub fn execute(
    input: &str,
    counts: Option<&str>,
    probabilities: Option<&str>,
    format: &str,
    max_nodes: Option<usize>,
    config: &Config,
) -> Result<()> {
    let json = is_json(format)?;
    let source = match (counts, probabilities) {
        (Some(path), None) => Source::Counts(path),
        (None, Some(path)) => Source::Probabilities(path),
        _ => anyhow::bail!("Pass exactly one of --counts or --probabilities"),
    };

    let graph = load_graph(input)?;
    let candidate = decode_file(source, graph.num_nodes())?;

    if !json {
        println!(
            "{} Most likely outcome decodes to {}",
            style("→").cyan().bold(),
            style(&candidate).green()
        );
    }
    report(&solver(max_nodes, config), &candidate, &graph, json)?;
    Ok(())
}
