//! `vcover-core` — exact minimum vertex cover for small weighted graphs.
//!
//! The crate is the classical baseline of a "vertex cover as an Ising
//! problem" workflow: it builds and loads graphs, checks candidate covers,
//! finds the optimum by exhaustive search, and decodes the output of an
//! external (eigensolver or sampling) solver so it can be checked against
//! that optimum.
//!
//! - [`graph`]: symmetric weight matrix with a zero diagonal
//! - [`generate`]: seeded random graphs
//! - [`cover`]: assignments and the edge-coverage predicate
//! - [`solver`]: brute-force search and verification of external answers
//! - [`gset`]: G-set text format
//! - [`decode`]: most likely assignment from probabilities or shot counts
//!
//! # Quick start
//!
//! ```rust
//! use vcover_core::{WeightMatrix, min_vertex_cover};
//!
//! // Triangle with weighted edges 0-1, 0-2, 1-2.
//! let graph = WeightMatrix::from_edges(3, &[(0, 1, 4.0), (0, 2, 5.0), (1, 2, 3.0)]).unwrap();
//! let solution = min_vertex_cover(&graph);
//!
//! assert_eq!(solution.size, 2);
//! assert_eq!(solution.assignment.to_string(), "011");
//! ```

pub mod cover;
pub mod decode;
pub mod error;
pub mod generate;
pub mod graph;
pub mod gset;
pub mod solver;

pub use cover::{Assignment, is_full_edge_coverage, is_minimal_cover, uncovered_edges};
pub use decode::{most_likely_from_counts, most_likely_from_probabilities};
pub use error::{CoverError, CoverResult};
pub use generate::RandomGraph;
pub use graph::WeightMatrix;
pub use solver::{
    BruteForce, CoverSolution, Verification, min_cover_size, min_vertex_cover, verify,
};
