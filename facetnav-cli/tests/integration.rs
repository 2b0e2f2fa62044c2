use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Catalog used by most tests:
///
/// ```text
/// Electronics (1)
///   Phones (2)
///     Smartphones (4)
///   Audio (3)
/// Garden (5)
/// ```
///
/// Items sit in 4 (two items) and 3 (one item); Garden has none.
const CATALOG: &str = r#"{
  "nodes": [
    { "id": 1, "label": "Electronics" },
    { "id": 2, "parent": 1, "label": "Phones" },
    { "id": 3, "parent": 1, "label": "Audio" },
    { "id": 4, "parent": 2, "label": "Smartphones" },
    { "id": 5, "label": "Garden" }
  ],
  "assignments": [
    { "item": 100, "node": 4 },
    { "item": 101, "node": 4 },
    { "item": 102, "node": 3 }
  ]
}"#;

/// Helper to create a `facetnav` command that runs in an isolated temp
/// directory, with no snapshot or format inherited from the environment.
fn facetnav_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("facetnav").unwrap();
    cmd.current_dir(work_dir.path());
    cmd.env_remove("FACETNAV_SNAPSHOT");
    cmd.env_remove("FACETNAV_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_catalog(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, CATALOG).unwrap();
    path
}

// ============================================================================
// Happy path tests
// ============================================================================

#[test]
fn version_flag() {
    Command::cargo_bin("facetnav")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("facetnav"));
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("facetnav")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("children"))
        .stdout(predicate::str::contains("siblings"))
        .stdout(predicate::str::contains("parents"));
}

#[test]
fn children_of_roots_as_tree() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    facetnav_cmd(&tmp)
        .arg("children")
        .arg("--snapshot")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Electronics (1) [items: 3, children: 2]\n  Phones (2) [items: 2, children: 1]",
        ))
        .stdout(predicate::str::contains("Garden (5) [items: 0, children: 0]"));
}

#[test]
fn children_remove_empty_hides_garden() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    facetnav_cmd(&tmp)
        .args(["children", "--empty", "remove-empty", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::str::contains("Electronics"))
        .stdout(predicate::str::contains("Garden").not());
}

#[test]
fn children_sorted_by_label_as_json() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    let output = facetnav_cmd(&tmp)
        .args(["children", "1", "--sort-by-label", "--format", "json"])
        .env("FACETNAV_SNAPSHOT", &snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let labels: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|level| level["entity"]["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Audio", "Phones"]);
    assert_eq!(json[1]["children"][0]["entity"]["id"], 4);
}

#[test]
fn children_include_start_marks_requested() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    facetnav_cmd(&tmp)
        .args(["children", "2", "--include-start", "--statistics", "none", "-s"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::eq("Phones (2) *\n  Smartphones (4)\n"));
}

#[test]
fn siblings_of_audio() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    facetnav_cmd(&tmp)
        .args(["siblings", "3", "--statistics", "cardinality", "-s"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::eq(
            "Phones (2) [items: 2]\n  Smartphones (4) [items: 2]\nAudio (3) [items: 1] *\n",
        ));
}

#[test]
fn parents_breadcrumb() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    facetnav_cmd(&tmp)
        .args(["parents", "4", "--statistics", "none", "-s"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::eq(
            "Electronics (1)\n  Phones (2)\n    Smartphones (4) *\n",
        ));
}

#[test]
fn parents_fan_out_matching() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    facetnav_cmd(&tmp)
        .args(["parents", "4", "--siblings-matching", "AUD"])
        .args(["--statistics", "none", "-s"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::eq(
            "Electronics (1)\n  Phones (2)\n    Smartphones (4) *\n  Audio (3)\n",
        ));
}

#[test]
fn children_stop_at_level_one() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    facetnav_cmd(&tmp)
        .args(["children", "--stop-at-level", "1", "--statistics", "none", "-s"])
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::eq("Electronics (1)\nGarden (5)\n"));
}

#[test]
fn parents_stop_at_distance_one() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    facetnav_cmd(&tmp)
        .args(["parents", "4", "--stop-at-distance", "1", "--statistics", "none"])
        .arg("-s")
        .arg(&snapshot)
        .assert()
        .success()
        .stdout(predicate::eq("Phones (2)\n  Smartphones (4) *\n"));
}

#[test]
fn parents_fan_out_skips_empty_ancestor() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sparse.json");
    std::fs::write(
        &path,
        r#"{
          "nodes": [
            { "id": 1, "label": "Electronics" },
            { "id": 2, "parent": 1, "label": "Phones" },
            { "id": 3, "parent": 1, "label": "Audio" },
            { "id": 4, "parent": 2, "label": "Smartphones" }
          ],
          "assignments": [{ "item": 100, "node": 3 }]
        }"#,
    )
    .unwrap();

    facetnav_cmd(&tmp)
        .args(["parents", "4", "--fan-out", "--empty", "remove-empty", "-s"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq(
            "Electronics (1) [items: 1, children: 1]\n  Audio (3) [items: 1, children: 0]\n",
        ));
}

#[test]
fn info_summary_json() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    let output = facetnav_cmd(&tmp)
        .args(["info", "--format", "json", "--empty", "remove-empty", "-s"])
        .arg(&snapshot)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 5);
    assert_eq!(json["roots"], 2);
    assert_eq!(json["leaves"], 3);
    assert_eq!(json["depth"], 3);
    assert_eq!(json["counted"], true);
    assert_eq!(json["visible"], 4);
}

// ============================================================================
// Config file
// ============================================================================

#[test]
fn config_file_supplies_snapshot_and_format() {
    let tmp = TempDir::new().unwrap();
    write_catalog(&tmp);
    std::fs::write(
        tmp.path().join("facetnav.toml"),
        "[navigation]\nsnapshot = \"catalog.json\"\nformat = \"json\"\nstatistics = \"none\"\n",
    )
    .unwrap();

    facetnav_cmd(&tmp)
        .args(["siblings", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"Garden\""))
        .stdout(predicate::str::contains("cardinality").not());
}

#[test]
fn flags_override_config_file() {
    let tmp = TempDir::new().unwrap();
    write_catalog(&tmp);
    std::fs::write(
        tmp.path().join("facetnav.toml"),
        "[navigation]\nsnapshot = \"catalog.json\"\nformat = \"json\"\n",
    )
    .unwrap();

    facetnav_cmd(&tmp)
        .args(["siblings", "5", "--format", "tree", "--statistics", "none"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "Electronics (1)\n  Phones (2)\n    Smartphones (4)\n  Audio (3)\nGarden (5) *\n",
        ));
}

#[test]
fn env_format_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    write_catalog(&tmp);
    std::fs::write(
        tmp.path().join("facetnav.json"),
        r#"{"navigation": {"snapshot": "catalog.json", "format": "tree"}}"#,
    )
    .unwrap();

    facetnav_cmd(&tmp)
        .args(["parents", "5"])
        .env("FACETNAV_FORMAT", "json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

// ============================================================================
// Error cases
// ============================================================================

#[test]
fn verbose_quiet_conflict() {
    let tmp = TempDir::new().unwrap();
    facetnav_cmd(&tmp)
        .args(["--verbose", "--quiet", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn stop_at_flags_conflict() {
    let tmp = TempDir::new().unwrap();
    facetnav_cmd(&tmp)
        .args(["children", "--stop-at-level", "2", "--stop-at-distance", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_snapshot_is_usage_error() {
    let tmp = TempDir::new().unwrap();
    facetnav_cmd(&tmp)
        .arg("children")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no snapshot file given"))
        .stderr(predicate::str::contains("FACETNAV_SNAPSHOT"));
}

#[test]
fn unknown_node_fails() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    facetnav_cmd(&tmp)
        .args(["siblings", "42", "-s"])
        .arg(&snapshot)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("node 42 not found in snapshot"));
}

#[test]
fn malformed_snapshot_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    std::fs::write(&path, r#"{"nodes": [{"id": 2, "parent": 9}]}"#).unwrap();

    facetnav_cmd(&tmp)
        .args(["info", "-s"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn unreadable_snapshot_fails() {
    let tmp = TempDir::new().unwrap();
    facetnav_cmd(&tmp)
        .args(["info", "-s", "does-not-exist.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read snapshot"));
}

#[test]
fn explicit_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let snapshot = write_catalog(&tmp);

    facetnav_cmd(&tmp)
        .args(["--config", "nope.toml", "info", "-s"])
        .arg(&snapshot)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}
