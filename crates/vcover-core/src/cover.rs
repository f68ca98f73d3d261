//! Candidate assignments and the edge-coverage predicate.
//!
//! An [`Assignment`] marks, per vertex, whether that vertex is part of a
//! proposed cover. The functions in this module are pure: they only read the
//! assignment and the graph.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoverError, CoverResult};
use crate::graph::WeightMatrix;

/// One binary decision per vertex; `true` means the vertex is in the cover.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Assignment(Vec<bool>);

impl Assignment {
    /// Wrap a vector of inclusion flags.
    pub fn new(bits: Vec<bool>) -> Self {
        Self(bits)
    }

    /// The all-zero assignment of the given width.
    pub fn none(n_nodes: usize) -> Self {
        Self(vec![false; n_nodes])
    }

    /// The all-one assignment of the given width.
    pub fn all(n_nodes: usize) -> Self {
        Self(vec![true; n_nodes])
    }

    /// Expand `index` into its `width`-bit binary representation,
    /// most significant bit first.
    ///
    /// Index 3 with width 3 is `011`: vertex 0 excluded, vertices 1 and 2
    /// included. Bits of `index` above `width` are ignored.
    pub fn from_index(index: u64, width: usize) -> Self {
        Self(
            (0..width)
                .map(|i| {
                    let shift = width - 1 - i;
                    shift < 64 && (index >> shift) & 1 == 1
                })
                .collect(),
        )
    }

    /// Expand `index` least significant bit first, so bit i belongs to
    /// vertex i. This is the order of amplitudes in a state vector.
    pub fn from_index_lsb(index: u64, width: usize) -> Self {
        Self((0..width).map(|i| i < 64 && (index >> i) & 1 == 1).collect())
    }

    /// Parse a string of `0`/`1` characters, vertex 0 first.
    pub fn from_bitstring(bits: &str) -> CoverResult<Self> {
        bits.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(CoverError::InvalidBitstring(bits.to_string())),
            })
            .collect::<CoverResult<Vec<_>>>()
            .map(Self)
    }

    /// Build an assignment of width `n_nodes` including exactly `vertices`.
    pub fn from_vertices(n_nodes: usize, vertices: &[usize]) -> CoverResult<Self> {
        let mut bits = vec![false; n_nodes];
        for &vertex in vertices {
            *bits
                .get_mut(vertex)
                .ok_or(CoverError::VertexOutOfRange { vertex, n_nodes })? = true;
        }
        Ok(Self(bits))
    }

    /// Number of vertices (width of the assignment).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the assignment has zero width.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `vertex` is included.
    pub fn includes(&self, vertex: usize) -> bool {
        self.0.get(vertex).copied().unwrap_or(false)
    }

    /// Number of included vertices (Hamming weight).
    pub fn count_included(&self) -> usize {
        self.0.iter().filter(|b| **b).count()
    }

    /// Indices of the included vertices, ascending.
    pub fn included_vertices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.then_some(i))
            .collect()
    }

    /// The inclusion flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// Assignment as `0`/`1` integers, vertex 0 first.
    pub fn to_bits(&self) -> Vec<u8> {
        self.0.iter().map(|b| u8::from(*b)).collect()
    }

    /// Copy of this assignment with `vertex` excluded.
    pub fn without(&self, vertex: usize) -> Self {
        let mut bits = self.0.clone();
        if let Some(b) = bits.get_mut(vertex) {
            *b = false;
        }
        Self(bits)
    }

    /// Fail unless the assignment has exactly one entry per vertex of `graph`.
    pub fn check_against(&self, graph: &WeightMatrix) -> CoverResult<()> {
        if self.len() == graph.num_nodes() {
            Ok(())
        } else {
            Err(CoverError::AssignmentLength {
                expected: graph.num_nodes(),
                got: self.len(),
            })
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            f.write_str(if *b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Assignment {
    type Err = CoverError;

    fn from_str(s: &str) -> CoverResult<Self> {
        Self::from_bitstring(s.trim())
    }
}

impl From<Assignment> for String {
    fn from(assignment: Assignment) -> Self {
        assignment.to_string()
    }
}

impl TryFrom<String> for Assignment {
    type Error = CoverError;

    fn try_from(bits: String) -> CoverResult<Self> {
        Self::from_bitstring(&bits)
    }
}

/// Whether every edge of `graph` has at least one endpoint included.
///
/// The caller must pass an assignment of the graph's width; a vertex beyond
/// the end of the assignment counts as excluded.
pub fn is_full_edge_coverage(assignment: &Assignment, graph: &WeightMatrix) -> bool {
    graph
        .edges()
        .all(|(a, b, _)| assignment.includes(a) || assignment.includes(b))
}

/// Edges with neither endpoint included.
pub fn uncovered_edges(assignment: &Assignment, graph: &WeightMatrix) -> Vec<(usize, usize)> {
    graph
        .edges()
        .filter(|(a, b, _)| !assignment.includes(*a) && !assignment.includes(*b))
        .map(|(a, b, _)| (a, b))
        .collect()
}

/// Whether `assignment` is a cover from which no single vertex can be dropped.
///
/// Every minimum cover is minimal in this sense; the converse does not hold.
pub fn is_minimal_cover(assignment: &Assignment, graph: &WeightMatrix) -> bool {
    is_full_edge_coverage(assignment, graph)
        && assignment
            .included_vertices()
            .into_iter()
            .all(|v| !is_full_edge_coverage(&assignment.without(v), graph))
}
