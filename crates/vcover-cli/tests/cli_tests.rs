//! End-to-end tests for the `vcover` binary.
//!
//! Each test runs the compiled binary in a temporary directory and inspects
//! its stdout, JSON output, and exit status.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn vcover(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vcover"))
        .args(args)
        .current_dir(dir)
        // Keep a developer's ~/.vcover/config.yaml out of the picture.
        .env("HOME", dir)
        .env_remove("VCOVER_CONFIG")
        .env_remove("VCOVER_NODES")
        .env_remove("VCOVER_EDGE_PROB")
        .env_remove("VCOVER_WEIGHT_RANGE")
        .env_remove("VCOVER_SEED")
        .env_remove("VCOVER_MAX_NODES")
        .output()
        .expect("failed to run vcover")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "vcover failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// ============================================================================
// solve
// ============================================================================

#[test]
fn test_solve_triangle_gset() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("triangle.txt"), "3 3\n1 2 4\n1 3 5\n2 3 3\n").unwrap();

    let out = vcover(&["solve", "-i", "triangle.txt", "-f", "json"], dir.path());
    let report = stdout_json(&out);
    assert_eq!(report["min_cover_size"], 2);
    assert_eq!(report["assignment"], "011");
    assert_eq!(report["candidates"], 8);
}

#[test]
fn test_solve_json_matrix() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("edge.json"), "[[0, 1], [1, 0]]").unwrap();

    let report = stdout_json(&vcover(&["solve", "-i", "edge.json", "-f", "json"], dir.path()));
    assert_eq!(report["min_cover_size"], 1);
}

#[test]
fn test_solve_edgeless_random_graph() {
    let dir = TempDir::new().unwrap();
    let report = stdout_json(&vcover(
        &["solve", "-n", "5", "-p", "0", "-f", "json"],
        dir.path(),
    ));
    assert_eq!(report["n_edges"], 0);
    assert_eq!(report["min_cover_size"], 0);
}

#[test]
fn test_solve_table_output() {
    let dir = TempDir::new().unwrap();
    let out = vcover(&["solve", "-n", "4", "-p", "1"], dir.path());
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("Minimum vertex cover"));
    assert!(text.contains("0111"));
}

#[test]
fn test_solve_refuses_wide_graph() {
    let dir = TempDir::new().unwrap();
    let out = vcover(&["solve", "-n", "12", "--max-nodes", "10"], dir.path());
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("limited to 10 nodes"));
}

#[test]
fn test_solve_refuses_wide_random_graph_before_generating() {
    let dir = TempDir::new().unwrap();
    let started = std::time::Instant::now();
    let out = vcover(&["solve", "-n", "200000", "-f", "json"], dir.path());
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("limited to 30 nodes"));
    assert!(started.elapsed() < std::time::Duration::from_secs(10));
}

// ============================================================================
// generate
// ============================================================================

#[test]
fn test_generate_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let args = ["generate", "-n", "8", "-p", "0.4", "-s", "42"];
    let first = vcover(&args, dir.path());
    let second = vcover(&args, dir.path());
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).starts_with("8 "));
}

#[test]
fn test_generate_then_solve() {
    let dir = TempDir::new().unwrap();
    let out = vcover(
        &["generate", "-n", "6", "-p", "1", "-o", "k6.txt"],
        dir.path(),
    );
    assert!(out.status.success());

    let report = stdout_json(&vcover(&["solve", "-i", "k6.txt", "-f", "json"], dir.path()));
    assert_eq!(report["n_edges"], 15);
    assert_eq!(report["min_cover_size"], 5);
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("vcover.yaml"),
        "graph:\n  n_nodes: 7\n  edge_probability: 1.0\n",
    )
    .unwrap();

    let report = stdout_json(&vcover(
        &["--config", "vcover.yaml", "solve", "-f", "json"],
        dir.path(),
    ));
    assert_eq!(report["n_nodes"], 7);
    assert_eq!(report["min_cover_size"], 6);
}

// ============================================================================
// check / decode
// ============================================================================

#[test]
fn test_check_verdicts() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("path.txt"), "4 3\n1 2 1\n2 3 1\n3 4 1\n").unwrap();

    let good = stdout_json(&vcover(
        &["check", "-i", "path.txt", "-a", "0110", "-f", "json"],
        dir.path(),
    ));
    assert_eq!(good["valid"], true);
    assert_eq!(good["optimal"], true);

    let bad = stdout_json(&vcover(
        &["check", "-i", "path.txt", "-a", "1000", "-f", "json"],
        dir.path(),
    ));
    assert_eq!(bad["valid"], false);
    assert_eq!(bad["optimal_size"], 2);
}

#[test]
fn test_check_rejects_bad_bitstring() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("g.txt"), "2 1\n1 2 1\n").unwrap();
    let out = vcover(&["check", "-i", "g.txt", "-a", "0x"], dir.path());
    assert!(!out.status.success());
}

#[test]
fn test_decode_counts() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("triangle.txt"), "3 3\n1 2 4\n1 3 5\n2 3 3\n").unwrap();
    std::fs::write(
        dir.path().join("counts.json"),
        r#"{"110": 812, "101": 100, "001": 112}"#,
    )
    .unwrap();

    let verdict = stdout_json(&vcover(
        &["decode", "-i", "triangle.txt", "--counts", "counts.json", "-f", "json"],
        dir.path(),
    ));
    assert_eq!(verdict["candidate"], "011");
    assert_eq!(verdict["optimal"], true);
}

#[test]
fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let out = vcover(&["solve", "-i", "nope.txt"], dir.path());
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("File not found"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    let out = vcover(&["version"], dir.path());
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("vcover"));
}
