use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let nb = dir.join("frame.ipynb");
    let snap = dir.join("frame.json");
    fs::write(
        &nb,
        r#"{"cells": [{"cell_type": "code", "source": ["k = 4\n", "K = [[k, 0], [0, k]]\n"]}]}"#,
    )
    .unwrap();
    fs::write(
        &snap,
        r#"{"k": {"value": "4", "type": "int"},
            "K": {"value": "[[4, 0], [0, 4]]", "type": "ndarray"},
            "loop_var": {"value": "9", "type": "int"}}"#,
    )
    .unwrap();
    (nb, snap)
}

fn inspect(dir: &Path, extra: &[&str]) -> assert_cmd::assert::Assert {
    let (nb, snap) = write_inputs(dir);
    Command::new(assert_cmd::cargo::cargo_bin!("pyreport"))
        .env("XDG_CONFIG_HOME", dir)
        .arg("inspect")
        .arg("--notebook")
        .arg(&nb)
        .arg("--snapshot")
        .arg(&snap)
        .args(extra)
        .assert()
}

#[test]
fn inspect_prints_table() {
    let tmp = tempdir().unwrap();
    inspect(tmp.path(), &[])
        .success()
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("matrix"))
        .stdout(predicate::str::contains("[[4, 0], [0, 4]]"))
        .stdout(predicate::str::contains("Total: 3 variables (2 defined in the notebook)"));
}

#[test]
fn inspect_json_matches_vars_document() {
    let tmp = tempdir().unwrap();
    let assert = inspect(tmp.path(), &["--json"]).success();
    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["K"]["replaced"], "[[4, 0], [0, 4]]");
    assert_eq!(json["K"]["latexValue"], r"\begin{bmatrix} 4 & 0 \\ 0 & 4 \end{bmatrix}");
    assert_eq!(json["loop_var"], serde_json::json!({"value": "9", "type": "int"}));
}
