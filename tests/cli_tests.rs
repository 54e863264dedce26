//! Integration tests for the dfpaths binary

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

const TINY_CG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/tinyCG.txt");

fn dfpaths() -> Command {
    let mut cmd = cargo_bin_cmd!("dfpaths");
    cmd.env_remove("RUST_LOG")
        .env_remove("DFPATHS_LOG")
        .env_remove("DFPATHS_LOG_LEVEL");
    cmd
}

#[test]
fn test_help_flag() {
    dfpaths()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: dfpaths"))
        .stdout(predicate::str::contains("--canonical"));
}

#[test]
fn test_all_sections_from_zero() {
    let expected = "\
Adjacency List:
---------------
0: 2->1->5
1: 0->2
2: 0->1->3->4
3: 5->4->2
4: 3->2
5: 3->0

marked   edgeTo
------   ------
true       -
true       2
true       0
true       2
true       3
true       3

Paths:
0 to 0:  0
0 to 1:  0-2-1
0 to 2:  0-2
0 to 3:  0-2-3
0 to 4:  0-2-3-4
0 to 5:  0-2-3-5
";

    dfpaths()
        .args([TINY_CG, "0"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_paths_only_from_two() {
    dfpaths()
        .args([TINY_CG, "2", "--show", "paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 to 4:  2-0-5-3-4"))
        .stdout(predicate::str::contains("Adjacency").not());
}

#[test]
fn test_append_order_changes_paths() {
    // append order: 0: 5 1 2, 3: 2 4 5
    dfpaths()
        .args([TINY_CG, "0", "--show", "paths", "--order", "append"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 to 4:  0-5-3-2-4"));
}

#[test]
fn test_canonical_order() {
    dfpaths()
        .args([TINY_CG, "0", "--show", "adjacency,paths", "--canonical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0: 1->2->5"))
        .stdout(predicate::str::contains("0 to 5:  0-1-2-3-5"));
}

#[test]
fn test_not_connected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("split.txt");
    std::fs::write(&path, "4\n2\n0 1\n2 3\n").unwrap();

    dfpaths()
        .arg(&path)
        .args(["1", "--show", "paths"])
        .assert()
        .success()
        .stdout("Paths:\n1 to 0:  1-0\n1 to 1:  1\n1 to 2:  not connected\n1 to 3:  not connected\n");
}

#[test]
fn test_invalid_source() {
    for source in ["6", "-1"] {
        dfpaths()
            .args([TINY_CG, source])
            .assert()
            .failure()
            .stderr(predicate::str::contains(format!(
                "error: vertex {source} is not between 0 and 5"
            )));
    }
}

#[test]
fn test_missing_file() {
    dfpaths()
        .args(["does/not/exist.txt", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read graph from"));
}

#[test]
fn test_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "3\n1\n0 7\n").unwrap();

    dfpaths()
        .arg(&path)
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("vertex 7 is not between 0 and 2"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    dfpaths()
        .args([TINY_CG, "0", "--show", "paths", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("depth-first search finished"));
}
