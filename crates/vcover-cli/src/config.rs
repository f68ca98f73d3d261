//! Configuration file support.
//!
//! Defaults for random graph generation and the solver node cap can be kept
//! in a YAML file:
//!
//! ```yaml
//! graph:
//!   n_nodes: 6
//!   edge_probability: 0.4
//!   weight_range: 10
//!   negative_weight: false
//!   seed: 10598
//! solver:
//!   max_nodes: 24
//! ```
//!
//! Precedence (highest to lowest):
//! 1. Command-line flags and `VCOVER_*` environment variables
//! 2. The file given with `--config`, else `~/.vcover/config.yaml` if present
//! 3. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vcover_core::RandomGraph;
use vcover_core::solver::DEFAULT_MAX_NODES;

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Random graph defaults.
    pub graph: RandomGraph,

    /// Solver settings.
    pub solver: SolverConfig,
}

/// Brute-force solver settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Refuse graphs with more nodes than this.
    pub max_nodes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl Config {
    /// Parse a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        serde_yaml_ng::from_str(source).context("Invalid configuration")
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when the file is there and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("no configuration file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&source)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}

/// `~/.vcover/config.yaml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".vcover").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.graph, RandomGraph::default());
        assert_eq!(config.solver.max_nodes, DEFAULT_MAX_NODES);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("graph:\n  n_nodes: 9\n  seed: 7\n").unwrap();
        assert_eq!(config.graph.n_nodes, 9);
        assert_eq!(config.graph.seed, 7);
        assert_eq!(config.graph.edge_probability, RandomGraph::default().edge_probability);
        assert_eq!(config.solver, SolverConfig::default());
    }

    #[test]
    fn test_solver_section() {
        let config = Config::from_yaml("solver:\n  max_nodes: 12\n").unwrap();
        assert_eq!(config.solver.max_nodes, 12);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(Config::from_yaml("graph: [1, 2").is_err());
        assert!(Config::from_yaml("graph:\n  n_nodes: many\n").is_err());
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.yaml"))).is_err());
    }

    #[test]
    fn test_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "graph:\n  edge_probability: 0.9\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.graph.edge_probability, 0.9);
    }
}
