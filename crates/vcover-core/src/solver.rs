//! Exhaustive minimum vertex cover search.
//!
//! The solver walks every integer in `0..2^n`, expands it into an n-bit
//! assignment (most significant bit first), and keeps the first valid cover
//! with the fewest included vertices. The running time is `O(2^n · |E|)`,
//! which is fine up to roughly 25 nodes. It exists as an exact baseline for
//! answers produced by heuristic or quantum solvers.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cover::{Assignment, is_full_edge_coverage, uncovered_edges};
use crate::error::{CoverError, CoverResult};
use crate::graph::WeightMatrix;

/// Default node cap for [`BruteForce`].
pub const DEFAULT_MAX_NODES: usize = 30;

/// Widest graph the 64-bit candidate counter can enumerate.
pub const MAX_ENUMERABLE_NODES: usize = 63;

/// How many candidates pass between two progress callbacks.
pub const PROGRESS_INTERVAL: u64 = 1 << 16;

/// Result of a brute-force search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverSolution {
    /// Size of a minimum vertex cover.
    pub size: usize,
    /// First minimum cover in enumeration order.
    pub assignment: Assignment,
    /// Number of candidate assignments examined.
    pub candidates: u64,
}

impl CoverSolution {
    /// Vertices of the witnessing cover.
    pub fn vertices(&self) -> Vec<usize> {
        self.assignment.included_vertices()
    }
}

/// Configurable exhaustive solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BruteForce {
    max_nodes: usize,
}

impl Default for BruteForce {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl BruteForce {
    /// Solver with the default node cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse graphs with more than `max_nodes` vertices.
    ///
    /// Values above [`MAX_ENUMERABLE_NODES`] are clamped.
    #[must_use]
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes.min(MAX_ENUMERABLE_NODES);
        self
    }

    /// Current node cap.
    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Fail if `graph` is wider than the node cap.
    pub fn check_tractable(&self, graph: &WeightMatrix) -> CoverResult<()> {
        self.check_node_count(graph.num_nodes())
    }

    /// Fail if a graph with `n_nodes` vertices would exceed the node cap.
    ///
    /// Lets callers refuse a graph before building it.
    pub fn check_node_count(&self, n_nodes: usize) -> CoverResult<()> {
        if n_nodes > self.max_nodes {
            return Err(CoverError::TooManyNodes {
                n_nodes,
                max: self.max_nodes,
            });
        }
        Ok(())
    }

    /// Find a minimum vertex cover.
    pub fn solve(&self, graph: &WeightMatrix) -> CoverResult<CoverSolution> {
        self.solve_with_progress(graph, |_| {})
    }

    /// Find a minimum vertex cover, reporting the number of candidates
    /// examined every [`PROGRESS_INTERVAL`] candidates and once at the end.
    pub fn solve_with_progress<F>(
        &self,
        graph: &WeightMatrix,
        progress: F,
    ) -> CoverResult<CoverSolution>
    where
        F: FnMut(u64),
    {
        self.check_tractable(graph)?;
        Ok(search(graph, progress))
    }
}

/// Size of a minimum vertex cover of `graph`.
///
/// # Panics
///
/// Panics if the graph has more than [`MAX_ENUMERABLE_NODES`] vertices.
pub fn min_cover_size(graph: &WeightMatrix) -> usize {
    min_vertex_cover(graph).size
}

/// A minimum vertex cover of `graph` with its witness.
///
/// # Panics
///
/// Panics if the graph has more than [`MAX_ENUMERABLE_NODES`] vertices.
pub fn min_vertex_cover(graph: &WeightMatrix) -> CoverSolution {
    assert!(
        graph.num_nodes() <= MAX_ENUMERABLE_NODES,
        "Brute force limited to {MAX_ENUMERABLE_NODES} nodes"
    );
    search(graph, |_| {})
}

fn search<F: FnMut(u64)>(graph: &WeightMatrix, mut progress: F) -> CoverSolution {
    let n_nodes = graph.num_nodes();
    let total: u64 = 1 << n_nodes;
    let started = Instant::now();
    debug!(
        n_nodes,
        n_edges = graph.num_edges(),
        candidates = total,
        "starting brute-force vertex cover search"
    );

    // The all-ones assignment always covers, so this is replaced.
    let mut best = Assignment::all(n_nodes);
    let mut best_size = n_nodes;

    for index in 0..total {
        if index > 0 && index % PROGRESS_INTERVAL == 0 {
            progress(index);
        }
        // Popcount first: a candidate that cannot improve is not checked.
        if index.count_ones() as usize >= best_size {
            continue;
        }
        let candidate = Assignment::from_index(index, n_nodes);
        if is_full_edge_coverage(&candidate, graph) {
            best_size = candidate.count_included();
            best = candidate;
        }
    }
    progress(total);

    info!(
        size = best_size,
        cover = %best,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "brute-force search finished"
    );

    CoverSolution {
        size: best_size,
        assignment: best,
        candidates: total,
    }
}

/// Outcome of checking a candidate cover against the exact optimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    /// The checked assignment.
    pub candidate: Assignment,
    /// Whether it covers every edge.
    pub valid: bool,
    /// Number of vertices it includes.
    pub size: usize,
    /// Size of a minimum cover.
    pub optimal_size: usize,
    /// Valid and of minimum size.
    pub optimal: bool,
    /// Edges the candidate leaves uncovered.
    pub uncovered: Vec<(usize, usize)>,
}

/// Check `candidate` against the brute-force optimum of `graph`.
pub fn verify(
    solver: &BruteForce,
    candidate: &Assignment,
    graph: &WeightMatrix,
) -> CoverResult<Verification> {
    candidate.check_against(graph)?;
    let optimum = solver.solve(graph)?;
    let uncovered = uncovered_edges(candidate, graph);
    let valid = uncovered.is_empty();
    let size = candidate.count_included();
    Ok(Verification {
        candidate: candidate.clone(),
        valid,
        size,
        optimal_size: optimum.size,
        optimal: valid && size == optimum.size,
        uncovered,
    })
}
