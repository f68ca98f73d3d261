//! Weighted undirected graphs stored as a symmetric weight matrix.
//!
//! Entry (i, j) holds the weight of the edge between vertices i and j; a zero
//! entry means no edge. Weights only describe the instance: the vertex cover
//! problem looks at which entries are nonzero, never at their magnitude or
//! sign.

use std::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{CoverError, CoverResult};

/// A symmetric weight matrix with a zero diagonal.
///
/// Every constructor validates the invariants, so any `WeightMatrix` value is
/// a well-formed undirected graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct WeightMatrix {
    weights: Array2<f64>,
}

impl WeightMatrix {
    /// Build a graph from the rows of a weight matrix.
    pub fn new(rows: Vec<Vec<f64>>) -> CoverResult<Self> {
        let n = rows.len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(CoverError::NotSquare {
                row,
                len: r.len(),
                expected: n,
            });
        }
        Self::from_array(Array2::from_shape_fn((n, n), |(i, j)| rows[i][j]))
    }

    /// Build a graph from an `ndarray` matrix, validating the invariants.
    pub fn from_array(weights: Array2<f64>) -> CoverResult<Self> {
        let (rows, cols) = weights.dim();
        if rows != cols {
            return Err(CoverError::NotSquare {
                row: 0,
                len: cols,
                expected: rows,
            });
        }
        for i in 0..rows {
            for j in i..cols {
                let forward = weights[[i, j]];
                let backward = weights[[j, i]];
                if !forward.is_finite() {
                    return Err(CoverError::NonFinite { i, j });
                }
                if !backward.is_finite() {
                    return Err(CoverError::NonFinite { i: j, j: i });
                }
                if i == j && forward != 0.0 {
                    return Err(CoverError::NonZeroDiagonal {
                        vertex: i,
                        weight: forward,
                    });
                }
                if forward != backward {
                    return Err(CoverError::Asymmetric {
                        i,
                        j,
                        forward,
                        backward,
                    });
                }
            }
        }
        Ok(Self { weights })
    }

    /// A graph with `n_nodes` vertices and no edges.
    pub fn empty(n_nodes: usize) -> Self {
        Self {
            weights: Array2::zeros((n_nodes, n_nodes)),
        }
    }

    /// Build a graph from an edge list of `(a, b, weight)` triples.
    ///
    /// Later duplicates overwrite earlier ones. A zero weight leaves the pair
    /// unconnected.
    pub fn from_edges(n_nodes: usize, edges: &[(usize, usize, f64)]) -> CoverResult<Self> {
        let mut graph = Self::empty(n_nodes);
        for &(a, b, weight) in edges {
            graph.set_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Build an unweighted graph (all weights 1) from an edge list.
    pub fn unweighted(n_nodes: usize, edges: &[(usize, usize)]) -> CoverResult<Self> {
        let weighted: Vec<_> = edges.iter().map(|&(a, b)| (a, b, 1.0)).collect();
        Self::from_edges(n_nodes, &weighted)
    }

    /// The complete graph K_n with unit weights.
    pub fn complete(n_nodes: usize) -> Self {
        Self {
            weights: Array2::from_shape_fn((n_nodes, n_nodes), |(i, j)| {
                if i == j { 0.0 } else { 1.0 }
            }),
        }
    }

    /// A star: vertex 0 connected to every other vertex.
    pub fn star(n_nodes: usize) -> Self {
        Self {
            weights: Array2::from_shape_fn((n_nodes, n_nodes), |(i, j)| {
                if i != j && (i == 0 || j == 0) { 1.0 } else { 0.0 }
            }),
        }
    }

    /// A path 0 - 1 - ... - (n-1).
    pub fn path(n_nodes: usize) -> Self {
        Self {
            weights: Array2::from_shape_fn((n_nodes, n_nodes), |(i, j)| {
                if i.abs_diff(j) == 1 { 1.0 } else { 0.0 }
            }),
        }
    }

    /// A cycle on `n_nodes` vertices (needs at least 3 to be simple).
    pub fn cycle(n_nodes: usize) -> Self {
        let mut graph = Self::path(n_nodes);
        if n_nodes >= 3 {
            graph.weights[[0, n_nodes - 1]] = 1.0;
            graph.weights[[n_nodes - 1, 0]] = 1.0;
        }
        graph
    }

    /// Number of vertices.
    pub fn num_nodes(&self) -> usize {
        self.weights.nrows()
    }

    /// Weight of the pair (a, b). Zero means no edge.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is out of range.
    pub fn weight(&self, a: usize, b: usize) -> f64 {
        self.weights[[a, b]]
    }

    /// Whether a and b are connected.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        a < self.num_nodes() && b < self.num_nodes() && self.weights[[a, b]] != 0.0
    }

    /// Iterate over edges as `(a, b, weight)` with `a < b`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.num_nodes();
        (0..n).flat_map(move |i| {
            ((i + 1)..n).filter_map(move |j| {
                let w = self.weights[[i, j]];
                (w != 0.0).then_some((i, j, w))
            })
        })
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Number of neighbours of `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> usize {
        self.weights
            .row(vertex)
            .iter()
            .filter(|w| **w != 0.0)
            .count()
    }

    /// Set the weight of an undirected edge, keeping the matrix symmetric.
    ///
    /// Setting a weight of zero removes the edge.
    pub fn set_edge(&mut self, a: usize, b: usize, weight: f64) -> CoverResult<()> {
        let n_nodes = self.num_nodes();
        for vertex in [a, b] {
            if vertex >= n_nodes {
                return Err(CoverError::VertexOutOfRange { vertex, n_nodes });
            }
        }
        if !weight.is_finite() {
            return Err(CoverError::NonFinite { i: a, j: b });
        }
        if a == b && weight != 0.0 {
            return Err(CoverError::NonZeroDiagonal { vertex: a, weight });
        }
        self.weights[[a, b]] = weight;
        self.weights[[b, a]] = weight;
        Ok(())
    }

    /// Remove the edge between a and b, if any.
    pub fn remove_edge(&mut self, a: usize, b: usize) -> CoverResult<()> {
        self.set_edge(a, b, 0.0)
    }

    /// Borrow the underlying matrix.
    pub fn as_array(&self) -> &Array2<f64> {
        &self.weights
    }

    /// Rows of the matrix as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.weights.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Parse a JSON array of rows, e.g. `[[0, 1], [1, 0]]`.
    pub fn from_json(json: &str) -> CoverResult<Self> {
        let rows: Vec<Vec<f64>> = serde_json::from_str(json)?;
        Self::new(rows)
    }

    /// Serialize as a JSON array of rows.
    pub fn to_json(&self) -> CoverResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl TryFrom<Vec<Vec<f64>>> for WeightMatrix {
    type Error = CoverError;

    fn try_from(rows: Vec<Vec<f64>>) -> CoverResult<Self> {
        Self::new(rows)
    }
}

impl From<WeightMatrix> for Vec<Vec<f64>> {
    fn from(graph: WeightMatrix) -> Self {
        graph.to_rows()
    }
}

impl fmt::Display for WeightMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph ({} nodes, {} edges):",
            self.num_nodes(),
            self.num_edges()
        )?;
        for (a, b, w) in self.edges() {
            if (w - 1.0).abs() < 1e-10 {
                writeln!(f, "  {a} -- {b}")?;
            } else {
                writeln!(f, "  {a} -- {b} (weight: {w})")?;
            }
        }
        Ok(())
    }
}
