//! Error types for the core crate.

use thiserror::Error;

/// Errors produced while building graphs, reading graph files, or decoding
/// solver output.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoverError {
    /// A weight matrix row has the wrong length.
    #[error("Weight matrix must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// A self loop was found on the diagonal.
    #[error("Weight matrix diagonal must be zero, found {weight} at ({vertex}, {vertex})")]
    NonZeroDiagonal {
        /// Vertex carrying the self loop.
        vertex: usize,
        /// The diagonal weight.
        weight: f64,
    },

    /// Entries (i, j) and (j, i) differ.
    #[error("Weight matrix is not symmetric: w[{i}][{j}] = {forward}, w[{j}][{i}] = {backward}")]
    Asymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// Value at (i, j).
        forward: f64,
        /// Value at (j, i).
        backward: f64,
    },

    /// A weight is NaN or infinite.
    #[error("Weight at ({i}, {j}) is not finite")]
    NonFinite {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
    },

    /// A vertex index does not exist in the graph.
    #[error("Vertex {vertex} out of range for a graph with {n_nodes} nodes")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Number of nodes in the graph.
        n_nodes: usize,
    },

    /// A generator or solver parameter is outside its domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// An assignment does not have one entry per vertex.
    #[error("Assignment has {got} entries but the graph has {expected} nodes")]
    AssignmentLength {
        /// Number of nodes in the graph.
        expected: usize,
        /// Length of the assignment.
        got: usize,
    },

    /// A bitstring contains characters other than `0` and `1`.
    #[error("Invalid bitstring '{0}': only '0' and '1' are allowed")]
    InvalidBitstring(String),

    /// The graph is too large for exhaustive search.
    #[error("Brute force limited to {max} nodes, graph has {n_nodes}")]
    TooManyNodes {
        /// Number of nodes in the graph.
        n_nodes: usize,
        /// Configured node cap.
        max: usize,
    },

    /// A probability vector or shot histogram cannot be decoded.
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    /// A graph file could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// The G-set header announced a different number of edges.
    #[error("Header declares {declared} edges but {found} were read")]
    EdgeCountMismatch {
        /// Edge count from the header line.
        declared: usize,
        /// Edge lines actually present.
        found: usize,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type CoverResult<T> = Result<T, CoverError>;
