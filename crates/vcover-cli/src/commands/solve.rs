//! Solve command implementation.
//!
//! Finds a minimum vertex cover by exhaustive search.

use std::time::Instant;

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use tracing::info;

use vcover_core::{Assignment, BruteForce, WeightMatrix};

use super::common::{
    GraphArgs, create_progress_bar, is_json, load_or_generate, print_graph, print_json,
    print_result, print_section, solver,
};
use crate::config::Config;

/// Graphs at least this wide get a progress bar.
const PROGRESS_MIN_NODES: usize = 16;

/// JSON output of the solve command.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    /// Number of nodes.
    pub n_nodes: usize,
    /// Number of edges.
    pub n_edges: usize,
    /// Size of a minimum vertex cover.
    pub min_cover_size: usize,
    /// Witnessing assignment, vertex 0 first.
    pub assignment: Assignment,
    /// Vertices of the witnessing cover.
    pub cover: Vec<usize>,
    /// Candidate assignments examined.
    pub candidates: u64,
    /// Wall-clock search time.
    pub elapsed_ms: u64,
}

/// Run the search, with a progress bar for wide graphs.
pub fn run(solver: &BruteForce, graph: &WeightMatrix, show_progress: bool) -> Result<SolveReport> {
    solver.check_tractable(graph)?;

    let started = Instant::now();
    let solution = if show_progress && graph.num_nodes() >= PROGRESS_MIN_NODES {
        let pb = create_progress_bar(1 << graph.num_nodes(), "Enumerating assignments...")?;
        let solution = solver.solve_with_progress(graph, |done| pb.set_position(done))?;
        pb.finish_with_message("Search complete");
        solution
    } else {
        solver.solve(graph)?
    };
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    info!(size = solution.size, elapsed_ms, "solved");
    Ok(SolveReport {
        n_nodes: graph.num_nodes(),
        n_edges: graph.num_edges(),
        min_cover_size: solution.size,
        cover: solution.vertices(),
        assignment: solution.assignment,
        candidates: solution.candidates,
        elapsed_ms,
    })
}

/// Execute the solve command.
pub fn execute(
    input: Option<&str>,
    graph_args: &GraphArgs,
    format: &str,
    max_nodes: Option<usize>,
    config: &Config,
) -> Result<()> {
    let json = is_json(format)?;
    let solver = solver(max_nodes, config);
    if input.is_none() {
        // Generating a random graph is quadratic in its width.
        solver.check_node_count(graph_args.resolve(config).n_nodes)?;
    }
    let graph = load_or_generate(input, graph_args, config)?;

    if json {
        let report = run(&solver, &graph, false).context("Brute-force search failed")?;
        return print_json(&report);
    }

    println!(
        "{} Minimum vertex cover of {}",
        style("→").cyan().bold(),
        style(input.unwrap_or("random graph")).green()
    );
    print_graph(&graph);

    let report = run(&solver, &graph, true).context("Brute-force search failed")?;

    print_section("Minimum vertex cover");
    print_result("Size", style(report.min_cover_size).yellow().bold());
    print_result("Assignment", &report.assignment);
    print_result("Cover", format!("{:?}", report.cover));
    print_result("Candidates", report.candidates);
    print_result("Time", format!("{} ms", report.elapsed_ms));

    Ok(())
}
