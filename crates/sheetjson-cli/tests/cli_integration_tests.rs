// sheetjson - Spreadsheet to JSON conversion
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sheetjson_cmd() -> Command {
    Command::cargo_bin("sheetjson").expect("Failed to find sheetjson binary")
}

// Test helper to create an input file inside a temporary directory
fn create_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write input file");
    path
}

fn read_json(path: PathBuf) -> Value {
    let text = fs::read_to_string(path).expect("Failed to read output");
    serde_json::from_str(&text).expect("Output is not JSON")
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    sheetjson_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--outdir"));
}

#[test]
fn test_version_output() {
    sheetjson_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sheetjson"));
}

// ===== Conversion Tests =====

#[test]
fn test_convert_csv() {
    let dir = TempDir::new().unwrap();
    let input = create_input(&dir, "Items.csv", "id,size.w,size.h\n1,10,20\n2,30,\n");
    let outdir = dir.path().join("out");

    sheetjson_cmd()
        .arg(&input)
        .arg("--outdir")
        .arg(&outdir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Items.json"));

    assert_eq!(
        read_json(outdir.join("Items.json")),
        json!({"data": [
            {"id": 1, "size": {"w": 10, "h": 20}},
            {"id": 2, "size": {"w": 30}}
        ]})
    );
}

#[test]
fn test_convert_table_option_and_prefix() {
    let dir = TempDir::new().unwrap();
    let input = create_input(&dir, "Users.csv", "name,manager:Users$ref=name\nann,\nbob,ann\n");
    let outdir = dir.path().join("out");

    sheetjson_cmd()
        .arg(&input)
        .args(["--prefix", "v1_", "--default-key", "users", "--pretty"])
        .arg("-o")
        .arg(&outdir)
        .assert()
        .success();

    let text = fs::read_to_string(outdir.join("v1_Users.json")).unwrap();
    assert!(text.contains("\n  \"users\": ["));
    let doc: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["users"][1]["manager"], json!([{"name": "ann"}]));
}

#[test]
fn test_dry_run_lists_artifacts() {
    let dir = TempDir::new().unwrap();
    let input = create_input(&dir, "Items.csv", "id\n1\n");
    let outdir = dir.path().join("out");

    sheetjson_cmd()
        .arg(&input)
        .arg("--outdir")
        .arg(&outdir)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::diff("Items\n"));

    assert!(!outdir.exists());
}

#[test]
fn test_logs_go_to_stderr() {
    let dir = TempDir::new().unwrap();
    let input = create_input(&dir, "Items.csv", "id\n1\n");

    sheetjson_cmd()
        .arg(&input)
        .arg("--dry-run")
        .arg("-v")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Items"));
}

// ===== Error Tests =====

#[test]
fn test_invalid_extension() {
    let dir = TempDir::new().unwrap();
    let input = create_input(&dir, "data.json", "{}");

    sheetjson_cmd()
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid input"));
}

#[test]
fn test_missing_input() {
    let dir = TempDir::new().unwrap();

    sheetjson_cmd()
        .arg(dir.path().join("absent.xlsx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}

#[test]
fn test_file_too_large() {
    let dir = TempDir::new().unwrap();
    let input = create_input(&dir, "Items.csv", "id\n1\n2\n3\n");

    sheetjson_cmd()
        .arg(&input)
        .env("SHEETJSON_MAX_FILE_SIZE", "2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_unknown_reference_target() {
    let dir = TempDir::new().unwrap();
    let input = create_input(&dir, "Items.csv", "id,x:Missing$ref=id\n1,2\n");

    sheetjson_cmd()
        .arg(&input)
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Missing"));
}

#[test]
fn test_missing_ref_option() {
    let dir = TempDir::new().unwrap();
    let input = create_input(&dir, "Items.csv", "id,x:Items\n1,2\n");

    sheetjson_cmd()
        .arg(&input)
        .arg("--dry-run")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_corrupt_xlsx() {
    let dir = TempDir::new().unwrap();
    let input = create_input(&dir, "book.xlsx", "not a workbook");

    sheetjson_cmd()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Read error"));
}
