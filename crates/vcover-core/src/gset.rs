//! Reading and writing graphs in G-set format.
//!
//! ```text
//! 3 3
//! 1 2 4
//! 1 3 5
//! 2 3 3
//! ```
//!
//! The header holds the node and edge counts; every following line is one
//! undirected edge with 1-based endpoints and a weight. Blank lines and lines
//! starting with `#` are ignored on input.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CoverError, CoverResult};
use crate::graph::WeightMatrix;

/// Parse G-set text into a graph.
pub fn parse(source: &str) -> CoverResult<WeightMatrix> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_line, header) = lines.next().ok_or_else(|| CoverError::Parse {
        line: 1,
        message: "missing 'nodes edges' header".into(),
    })?;
    let [n_nodes, declared] = parse_fields::<usize, 2>(header_line, header)?;
    let max_entries = isize::MAX as usize / std::mem::size_of::<f64>();
    if n_nodes.checked_mul(n_nodes).is_none_or(|entries| entries > max_entries) {
        return Err(CoverError::Parse {
            line: header_line,
            message: format!("{n_nodes} nodes do not fit in a weight matrix"),
        });
    }

    let mut graph = WeightMatrix::empty(n_nodes);
    let mut found = 0;
    for (line, text) in lines {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(CoverError::Parse {
                line,
                message: format!("expected 'i j weight', got {} fields", fields.len()),
            });
        }
        let a = parse_vertex(line, fields[0], n_nodes)?;
        let b = parse_vertex(line, fields[1], n_nodes)?;
        if a == b {
            return Err(CoverError::Parse {
                line,
                message: format!("self loop on vertex {}", a + 1),
            });
        }
        let weight: f64 = fields[2].parse().map_err(|_| CoverError::Parse {
            line,
            message: format!("invalid weight '{}'", fields[2]),
        })?;
        if !weight.is_finite() {
            return Err(CoverError::Parse {
                line,
                message: format!("weight '{}' is not finite", fields[2]),
            });
        }
        graph.set_edge(a, b, weight)?;
        found += 1;
    }

    if found != declared {
        return Err(CoverError::EdgeCountMismatch { declared, found });
    }
    debug!(n_nodes, n_edges = found, "parsed G-set graph");
    Ok(graph)
}

/// Render a graph as G-set text.
pub fn to_string(graph: &WeightMatrix) -> String {
    let mut out = format!("{} {}\n", graph.num_nodes(), graph.num_edges());
    for (a, b, w) in graph.edges() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} {} {}", a + 1, b + 1, w);
    }
    out
}

/// Read a G-set file.
pub fn read(path: impl AsRef<Path>) -> CoverResult<WeightMatrix> {
    parse(&fs::read_to_string(path)?)
}

/// Write a graph to a G-set file.
pub fn write(graph: &WeightMatrix, path: impl AsRef<Path>) -> CoverResult<()> {
    fs::write(path, to_string(graph))?;
    Ok(())
}

fn parse_fields<T: std::str::FromStr + Copy + Default, const N: usize>(
    line: usize,
    text: &str,
) -> CoverResult<[T; N]> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != N {
        return Err(CoverError::Parse {
            line,
            message: format!("expected {N} fields, got {}", fields.len()),
        });
    }
    let mut out = [T::default(); N];
    for (slot, field) in out.iter_mut().zip(&fields) {
        *slot = field.parse().map_err(|_| CoverError::Parse {
            line,
            message: format!("invalid number '{field}'"),
        })?;
    }
    Ok(out)
}

fn parse_vertex(line: usize, field: &str, n_nodes: usize) -> CoverResult<usize> {
    let vertex: usize = field.parse().map_err(|_| CoverError::Parse {
        line,
        message: format!("invalid vertex '{field}'"),
    })?;
    if vertex == 0 || vertex > n_nodes {
        return Err(CoverError::Parse {
            line,
            message: format!("vertex {vertex} outside 1..={n_nodes}"),
        });
    }
    Ok(vertex - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "3 3\n1 2 4\n1 3 5\n2 3 3\n";

    #[test]
    fn test_parse_triangle() {
        let g = parse(TRIANGLE).unwrap();
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.weight(1, 2), 3.0);
        assert_eq!(g.weight(2, 0), 5.0);
    }

    #[test]
    fn test_write_matches_input() {
        let g = parse(TRIANGLE).unwrap();
        assert_eq!(to_string(&g), TRIANGLE);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let g = parse("# generated\n\n2 1\n\n1 2 -3.5\n").unwrap();
        assert_eq!(g.weight(0, 1), -3.5);
    }

    #[test]
    fn test_edgeless() {
        let g = parse("5 0\n").unwrap();
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(to_string(&g), "5 0\n");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse(""), Err(CoverError::Parse { line: 1, .. })));
        assert!(matches!(parse("3\n"), Err(CoverError::Parse { line: 1, .. })));
        assert!(matches!(
            parse("3 1\n1 4 1\n"),
            Err(CoverError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse("3 1\n0 2 1\n"),
            Err(CoverError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse("3 1\n2 2 1\n"),
            Err(CoverError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse("3 1\n1 2 x\n"),
            Err(CoverError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse("3 2\n1 2 1\n"),
            Err(CoverError::EdgeCountMismatch { declared: 2, found: 1 })
        ));
        assert!(matches!(
            parse("4294967296 0\n"),
            Err(CoverError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            parse("# big\n3037000500 0\n"),
            Err(CoverError::Parse { line: 2, .. })
        ));
    }
}
