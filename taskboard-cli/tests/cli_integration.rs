use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn taskboard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("taskboard").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("TASKBOARD_STORAGE_DIR")
        .env_remove("TASKBOARD_DONE_MARKERS");
    cmd
}

fn json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    taskboard(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("task"))
        .stdout(predicate::str::contains("column"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_fresh_board_is_seeded_and_saved() {
    let temp = TempDir::new().unwrap();

    let output = taskboard(temp.path())
        .args(["column", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(json(&output)["count"], 3);

    // Reads alone do not write anything
    assert!(!temp.path().join(".taskboard").join("taskmanager_columns.json").exists());
}

#[test]
fn test_add_then_move_persists_between_runs() {
    let temp = TempDir::new().unwrap();

    let output = taskboard(temp.path())
        .args(["task", "add", "--column", "column-1", "Write docs"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let id = json(&output)["id"].as_str().unwrap().to_string();

    taskboard(temp.path())
        .args(["task", "move", id.as_str(), "--column", "column-1", "--index", "-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"order\": 0"));

    let output = taskboard(temp.path())
        .args(["task", "list", "--column", "column-1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let tasks = json(&output);
    let ids: Vec<&str> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![id.as_str(), "task-1", "task-2"]);
}

#[test]
fn test_empty_title_exits_with_usage_code() {
    let temp = TempDir::new().unwrap();
    taskboard(temp.path())
        .args(["column", "add", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("column title cannot be empty"));
}

#[test]
fn test_unknown_task_prints_null() {
    let temp = TempDir::new().unwrap();
    taskboard(temp.path())
        .args(["task", "get", "ghost"])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn test_stats_week_at_fixed_instant() {
    let temp = TempDir::new().unwrap();
    let output = taskboard(temp.path())
        .args(["stats", "week", "--now", "2001-01-03T10:00:00+03:00"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stats = json(&output);
    assert_eq!(stats["total"], 0);
    assert_eq!(stats["done_column"], "column-3");
}

#[test]
fn test_config_file_sets_storage_dir() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("taskboard.toml"), "storage_dir = \"board-data\"\n").unwrap();

    taskboard(temp.path())
        .args(["column", "add", "Archive"])
        .assert()
        .success();

    assert!(temp
        .path()
        .join("board-data")
        .join("taskmanager_columns.json")
        .exists());
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    taskboard(temp.path())
        .args(["--config", "nope.toml", "column", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("configuration file not found"));
}
