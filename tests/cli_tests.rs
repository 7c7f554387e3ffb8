//! Integration tests for the waypath CLI
//!
//! These tests run the waypath binary against graph files written to a
//! temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for waypath, isolated from any user config
fn waypath(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("waypath");
    cmd.current_dir(dir)
        .env("WAYPATH_CONFIG_DIR", dir.join("config"))
        .env_remove("WAYPATH_GRAPH")
        .env_remove("WAYPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

const FRIENDS_TOML: &str = r#"
nodes = ["anuj", "peggy", "thom", "jonny"]

[adjacency]
you = ["alice", "bob", "claire"]
bob = ["anuj", "peggy"]
alice = ["peggy"]
claire = ["thom", "jonny"]
"#;

const CLASSIC_JSON: &str = r#"{
    "nodes": ["finish"],
    "edges": [
        {"from": "start", "to": "a", "weight": 6},
        {"from": "start", "to": "b", "weight": 2},
        {"from": "a", "to": "a"},
        {"from": "a", "to": "finish", "weight": 1},
        {"from": "b", "to": "a", "weight": 3},
        {"from": "b", "to": "finish", "weight": 5}
    ]
}"#;

const NEGATIVE_YAML: &str = "
edges:
  - { from: s, to: t, weight: 2 }
  - { from: t, to: u, weight: -1 }
";

const SINGLE_EDGE_YAML: &str = "
edges:
  - { from: s, to: t, weight: 1 }
";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Help and usage
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    waypath(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: waypath"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("shortest"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    waypath(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("waypath --help"));
}

#[test]
fn test_missing_graph_is_usage_error() {
    let dir = tempdir().unwrap();
    waypath(dir.path())
        .args(["info"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph file given"));
}

#[test]
fn test_unknown_format_json_envelope() {
    let dir = tempdir().unwrap();
    waypath(dir.path())
        .args(["info", "--format", "json", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

#[test]
fn test_uppercase_json_format_gets_error_envelope() {
    let dir = tempdir().unwrap();
    waypath(dir.path())
        .args(["info", "--format", "JSON", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

#[test]
fn test_unsupported_graph_extension() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "graph.csv", "a,b");
    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .arg("info")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph file extension"));
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_finds_target() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "friends.toml", FRIENDS_TOML);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["search", "you", "--target", "jonny"])
        .assert()
        .success()
        .stdout("jonny\n");
}

#[test]
fn test_search_with_path() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "friends.toml", FRIENDS_TOML);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["search", "you", "--target", "peggy", "--path"])
        .assert()
        .success()
        .stdout("you -> alice -> peggy\n");
}

#[test]
fn test_search_not_found_exits_with_data_code() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "friends.toml", FRIENDS_TOML);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["search", "you", "--target", "mango"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("target not found: mango"));
}

#[test]
fn test_search_never_matches_start() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "friends.toml", FRIENDS_TOML);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["search", "you", "--target", "you"])
        .assert()
        .code(3);
}

#[test]
fn test_search_json_output() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "friends.toml", FRIENDS_TOML);

    let output = waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "search", "you", "--target", "jonny", "--path"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], "jonny");
    assert_eq!(json["hops"], 2);
    assert_eq!(json["path"], serde_json::json!(["you", "claire", "jonny"]));
}

#[test]
fn test_search_records_output() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "friends.toml", FRIENDS_TOML);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "records", "search", "you", "--target", "thom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H waypath=1 records=1 mode=search"))
        .stdout(predicate::str::contains("N id=\"thom\""));
}

#[test]
fn test_search_graph_from_env() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "friends.toml", FRIENDS_TOML);

    waypath(dir.path())
        .env("WAYPATH_GRAPH", &graph)
        .args(["search", "bob", "--target", "peggy"])
        .assert()
        .success()
        .stdout("peggy\n");
}

// ============================================================================
// shortest
// ============================================================================

#[test]
fn test_shortest_table() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["shortest", "start"])
        .assert()
        .success()
        .stdout("start  0\nb  2  (via start)\na  5  (via b)\nfinish  6  (via a)\n");
}

#[test]
fn test_shortest_path_to() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["shortest", "start", "--to", "finish"])
        .assert()
        .success()
        .stdout("start -> b -> a -> finish  (cost 6)\n");
}

#[test]
fn test_shortest_json_table() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);

    let output = waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["shortest", "start", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let nodes = json["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes[0]["id"], "start");
    assert!(nodes[0].get("parent").is_none());
    assert_eq!(nodes[3]["id"], "finish");
    assert_eq!(nodes[3]["cost"], 6.0);
    assert_eq!(nodes[3]["parent"], "a");
}

#[test]
fn test_shortest_unreachable_target() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["shortest", "finish", "--to", "start"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path not found: finish -> start"));
}

#[test]
fn test_shortest_rejects_negative_weights() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "negative.yaml", NEGATIVE_YAML);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["shortest", "s"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative edge weight -1 on t -> u"));
}

#[test]
fn test_config_can_disable_weight_validation() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "negative.yaml", NEGATIVE_YAML);
    let config = write_fixture(&dir, "waypath.toml", "[graph]\nvalidate_weights = false\n");

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .arg("--config")
        .arg(&config)
        .args(["shortest", "s", "--to", "u"])
        .assert()
        .success()
        .stdout("s -> t -> u  (cost 1)\n");
}

#[test]
fn test_config_default_format() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);
    fs::create_dir_all(dir.path().join("config")).unwrap();
    fs::write(dir.path().join("config/config.toml"), "format = \"json\"\n").unwrap();

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["shortest", "start", "--to", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cost\": 2.0"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);
    let config = write_fixture(&dir, "broken.toml", "format = [");

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .arg("--config")
        .arg(&config)
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

// ============================================================================
// neighbors / info
// ============================================================================

#[test]
fn test_neighbors_in_insertion_order() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["neighbors", "start"])
        .assert()
        .success()
        .stdout("a  (6)\nb  (2)\n");
}

#[test]
fn test_neighbors_of_unknown_node() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["neighbors", "nowhere"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("nowhere has no outgoing edges"));
}

#[test]
fn test_info_summary() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .arg("info")
        .assert()
        .success()
        .stdout("nodes: 4\nedges: 6\nweighted edges: 5\nweights: ok\n");
}

#[test]
fn test_info_reports_negative_weight() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "negative.yaml", NEGATIVE_YAML);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["info", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"weights_valid\": false"));
}

#[test]
fn test_info_counts_target_only_nodes() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "single.yaml", SINGLE_EDGE_YAML);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("nodes: 2\nedges: 1\n"));

    let output = waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "info"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 2);
    assert_eq!(json["declared_nodes"], 1);
}

// ============================================================================
// Quiet and logging flags
// ============================================================================

#[test]
fn test_quiet_suppresses_error_line() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "friends.toml", FRIENDS_TOML);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["--quiet", "search", "you", "--target", "mango"])
        .assert()
        .code(3)
        .stdout("")
        .stderr("");
}

#[test]
fn test_verbose_logs_graph_loading() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["--verbose", "info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded graph file"));
}

#[test]
fn test_log_json_emits_structured_events() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);

    waypath(dir.path())
        .arg("--graph")
        .arg(&graph)
        .args(["--log-json", "--log-level", "debug", "info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"loaded graph file\""));
}

#[test]
fn test_waypath_log_overrides_rust_log() {
    let dir = tempdir().unwrap();
    let graph = write_fixture(&dir, "classic.json", CLASSIC_JSON);

    waypath(dir.path())
        .env("RUST_LOG", "off")
        .env("WAYPATH_LOG", "waypath_core=debug")
        .arg("--graph")
        .arg(&graph)
        .arg("info")
        .assert()
        .success()
        .stderr(predicate::str::contains("loaded graph file"));
}
