//! Check command implementation.
//!
//! Verifies a candidate cover against the brute-force optimum.

use anyhow::{Context, Result};
use console::style;

use vcover_core::{Assignment, BruteForce, Verification, WeightMatrix, verify};

use super::common::{is_json, load_graph, print_json, print_result, print_section, solver};
use crate::config::Config;

/// Verify `candidate` and render the verdict.
pub fn report(
    solver: &BruteForce,
    candidate: &Assignment,
    graph: &WeightMatrix,
    json: bool,
) -> Result<Verification> {
    let verdict = verify(solver, candidate, graph).context("Verification failed")?;
    if json {
        print_json(&verdict)?;
    } else {
        print_verification(&verdict);
    }
    Ok(verdict)
}

/// Print a verification verdict as a table.
pub fn print_verification(verdict: &Verification) {
    print_section("Verification");
    print_result("Candidate", &verdict.candidate);
    print_result(
        "Cover",
        format!("{:?}", verdict.candidate.included_vertices()),
    );
    print_result("Size", verdict.size);
    print_result("Optimal size", verdict.optimal_size);

    if !verdict.valid {
        println!(
            "{} Not a vertex cover: {} edge(s) uncovered {:?}",
            style("✗").red().bold(),
            verdict.uncovered.len(),
            verdict.uncovered
        );
    } else if verdict.optimal {
        println!("{} Valid minimum vertex cover", style("✓").green().bold());
    } else {
        println!(
            "{} Valid cover, {} vertices above the optimum",
            style("!").yellow().bold(),
            verdict.size - verdict.optimal_size
        );
    }
}

/// Execute the check command.
pub fn execute(
    input: &str,
    assignment: &str,
    format: &str,
    max_nodes: Option<usize>,
    config: &Config,
) -> Result<()> {
    let json = is_json(format)?;
    let graph = load_graph(input)?;
    let candidate: Assignment = assignment
        .parse()
        .with_context(|| format!("Invalid assignment '{assignment}'"))?;

    report(&solver(max_nodes, config), &candidate, &graph, json)?;
    Ok(())
}
