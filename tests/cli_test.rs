//! End-to-end tests for the `treewalk` binary and its channel files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn treewalk_cmd() -> Command {
    Command::from(assert_cmd::cargo::cargo_bin_cmd!("treewalk"))
}

fn read_file(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).expect("Failed to read file")
}

#[test]
fn test_default_file_layout() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("in.txt"),
        "int a = 3;\na = a + 4;\nprint(a);\nprint(a / 0);\n",
    )
    .unwrap();

    treewalk_cmd().current_dir(temp.path()).assert().success();

    assert_eq!(
        read_file(temp.path(), "out.txt"),
        "Declared var[0] = 3\nAssigned var[0] = 7\nPrint: 7\nPrint: 0\n"
    );
    assert_eq!(
        read_file(temp.path(), "outError.txt"),
        "Error: Division by zero at line 4\n"
    );
    let trace = read_file(temp.path(), "tree.txt");
    assert_eq!(trace.matches(&"-".repeat(50)).count(), 4);
    assert!(trace.starts_with("\n     INTEGER(3)\n\ndec\n"));
}

#[test]
fn test_custom_paths() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("prog.txt"), "print(1 < 2);").unwrap();

    treewalk_cmd()
        .current_dir(temp.path())
        .args(["prog.txt", "-o", "effects.log", "-t", "trace.log", "-e", "errors.log"])
        .assert()
        .success();

    assert_eq!(read_file(temp.path(), "effects.log"), "Print: 1\n");
    assert_eq!(read_file(temp.path(), "errors.log"), "");
    assert!(!temp.path().join("out.txt").exists());
}

#[test]
fn test_parse_error_runs_nothing() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("in.txt"), "print(1);\nprint(2)\nprint(3);\n").unwrap();

    treewalk_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error at line 3"));

    assert_eq!(read_file(temp.path(), "out.txt"), "");
    assert_eq!(read_file(temp.path(), "tree.txt"), "");
    assert!(read_file(temp.path(), "outError.txt").ends_with(" at line 3\n"));
}

#[test]
fn test_stdout_mode() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("in.txt"), "print(6 * 7);").unwrap();

    treewalk_cmd()
        .current_dir(temp.path())
        .arg("--stdout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print: 42"))
        .stdout(predicate::str::contains("INTEGER(7)"));

    assert!(!temp.path().join("out.txt").exists());
}

#[test]
fn test_missing_input_fails() {
    let temp = TempDir::new().unwrap();

    treewalk_cmd()
        .current_dir(temp.path())
        .arg("missing.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read 'missing.txt'"));
}
