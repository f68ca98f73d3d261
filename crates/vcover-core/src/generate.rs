//! Seeded random graph generation.
//!
//! Each unordered pair of vertices becomes an edge with probability
//! `edge_probability`. Edge weights are drawn uniformly from
//! `1..=weight_range`, negated half of the time when `negative_weight` is
//! set. Weights never come out as zero, so every sampled pair is an edge.
//!
//! ```rust
//! use vcover_core::generate::RandomGraph;
//!
//! let a = RandomGraph::new(6).with_edge_probability(0.5).with_seed(7).generate().unwrap();
//! let b = RandomGraph::new(6).with_edge_probability(0.5).with_seed(7).generate().unwrap();
//! assert_eq!(a, b);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoverError, CoverResult};
use crate::graph::WeightMatrix;

/// Parameters of a random weighted graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomGraph {
    /// Number of vertices.
    pub n_nodes: usize,
    /// Probability that a given pair is connected.
    pub edge_probability: f64,
    /// Largest absolute edge weight.
    pub weight_range: u32,
    /// Allow negative weights.
    pub negative_weight: bool,
    /// RNG seed.
    pub seed: u64,
}

impl Default for RandomGraph {
    fn default() -> Self {
        Self {
            n_nodes: 4,
            edge_probability: 0.3,
            weight_range: 10,
            negative_weight: false,
            seed: 10_598,
        }
    }
}

impl RandomGraph {
    /// Default parameters for a graph on `n_nodes` vertices.
    pub fn new(n_nodes: usize) -> Self {
        Self {
            n_nodes,
            ..Self::default()
        }
    }

    /// Set the edge probability.
    #[must_use]
    pub fn with_edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = p;
        self
    }

    /// Set the largest absolute weight.
    #[must_use]
    pub fn with_weight_range(mut self, range: u32) -> Self {
        self.weight_range = range;
        self
    }

    /// Allow or forbid negative weights.
    #[must_use]
    pub fn with_negative_weight(mut self, enabled: bool) -> Self {
        self.negative_weight = enabled;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check parameter domains.
    pub fn validate(&self) -> CoverResult<()> {
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(CoverError::InvalidParameter {
                name: "edge_probability",
                reason: format!("must lie in [0, 1], got {}", self.edge_probability),
            });
        }
        if self.weight_range == 0 {
            return Err(CoverError::InvalidParameter {
                name: "weight_range",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Generate the graph with an RNG seeded from `self.seed`.
    pub fn generate(&self) -> CoverResult<WeightMatrix> {
        self.generate_with_rng(StdRng::seed_from_u64(self.seed))
    }

    /// Generate the graph from a caller-supplied RNG.
    ///
    /// `seed` is ignored; seeding `rng` makes the result reproducible.
    pub fn generate_with_rng<R: Rng>(&self, mut rng: R) -> CoverResult<WeightMatrix> {
        self.validate()?;

        let mut graph = WeightMatrix::empty(self.n_nodes);
        for i in 0..self.n_nodes {
            for j in (i + 1)..self.n_nodes {
                if rng.r#gen::<f64>() >= self.edge_probability {
                    continue;
                }
                let magnitude = f64::from(rng.gen_range(1..=self.weight_range));
                let weight = if self.negative_weight && rng.gen_bool(0.5) {
                    -magnitude
                } else {
                    magnitude
                };
                graph.set_edge(i, j, weight)?;
            }
        }

        debug!(
            n_nodes = self.n_nodes,
            n_edges = graph.num_edges(),
            edge_probability = self.edge_probability,
            seed = self.seed,
            "generated random graph"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_graph() {
        let params = RandomGraph::new(8).with_edge_probability(0.4).with_seed(42);
        assert_eq!(params.generate().unwrap(), params.generate().unwrap());
    }

    #[test]
    fn test_probability_extremes() {
        let none = RandomGraph::new(6).with_edge_probability(0.0).generate().unwrap();
        assert_eq!(none.num_edges(), 0);

        let all = RandomGraph::new(6).with_edge_probability(1.0).generate().unwrap();
        assert_eq!(all.num_edges(), 15);
    }

    #[test]
    fn test_weights_within_range() {
        let g = RandomGraph::new(10)
            .with_edge_probability(1.0)
            .with_weight_range(3)
            .with_negative_weight(true)
            .with_seed(1)
            .generate()
            .unwrap();
        assert!(g.edges().all(|(_, _, w)| w != 0.0 && w.abs() <= 3.0));
    }

    #[test]
    fn test_positive_only_by_default() {
        let g = RandomGraph::new(10).with_edge_probability(1.0).generate().unwrap();
        assert!(g.edges().all(|(_, _, w)| w >= 1.0));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            RandomGraph::new(3).with_edge_probability(1.5).generate(),
            Err(CoverError::InvalidParameter { name: "edge_probability", .. })
        ));
        assert!(matches!(
            RandomGraph::new(3).with_weight_range(0).generate(),
            Err(CoverError::InvalidParameter { name: "weight_range", .. })
        ));
    }

    #[test]
    fn test_zero_nodes() {
        let g = RandomGraph::new(0).generate().unwrap();
        assert_eq!(g.num_nodes(), 0);
    }
}
