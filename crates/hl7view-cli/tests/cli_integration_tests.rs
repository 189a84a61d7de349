// hl7view - HL7 v2.x message inspector
//
// Copyright (c) 2025 hl7view contributors.
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

//! Integration tests for the hl7view binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const ADT_A01: &str = "MSH|^~\\&|ADT1|HOSP|LAB|HOSP|20240101||ADT^A01|MSG00001|P|2.5\nEVN|A01|20240101\nPID|1||12345^^^HOSP^MR||DOE^JOHN";

fn hl7view_cmd() -> Command {
    Command::cargo_bin("hl7view").expect("Failed to find hl7view binary")
}

fn write_message(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path.to_str().unwrap().to_string()
}

#[test]
fn validate_reports_segments() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "adt.hl7", ADT_A01);

    hl7view_cmd()
        .args(["validate", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Segments: 3"))
        .stdout(predicate::str::contains("Nodes:"))
        .stdout(predicate::str::contains("Message Header"))
        .stdout(predicate::str::contains("Control ID: MSG00001"));
}

#[test]
fn validate_names_unknown_segment_code() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "custom.hl7", "ZCU|1|custom");

    hl7view_cmd()
        .args(["validate", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown Segment (ZCU)"));
}

#[test]
fn validate_rejects_file_over_size_cap() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "adt.hl7", ADT_A01);

    hl7view_cmd()
        .env("HL7VIEW_MAX_FILE_SIZE", "16")
        .args(["validate", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"))
        .stderr(predicate::str::contains("HL7VIEW_MAX_FILE_SIZE"));
}

#[test]
fn validate_warns_on_short_line() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "short.hl7", "PID|1\nAB\n");

    hl7view_cmd()
        .args(["validate", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("too short"));
}

#[test]
fn validate_fails_on_empty_file() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "empty.hl7", "  \n ");

    hl7view_cmd()
        .args(["validate", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no segments"));
}

#[test]
fn validate_fails_on_missing_file() {
    hl7view_cmd()
        .args(["validate", "/nonexistent/message.hl7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/nonexistent/message.hl7"));
}

#[test]
fn inspect_shows_annotated_tree() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "adt.hl7", ADT_A01);

    hl7view_cmd()
        .args(["inspect", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("HL7 Message"))
        .stdout(predicate::str::contains("Patient Identification"))
        .stdout(predicate::str::contains("MSH-9"))
        .stdout(predicate::str::contains("Admit/visit notification"));
}

#[test]
fn inspect_values_shows_source_text() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "adt.hl7", ADT_A01);

    hl7view_cmd()
        .args(["inspect", &path, "--values"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ADT^A01\""))
        .stdout(predicate::str::contains("\"12345\""));
}

#[test]
fn inspect_json_emits_valid_json() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "adt.hl7", ADT_A01);

    let output = hl7view_cmd()
        .args(["inspect", &path, "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let tree: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON");
    assert_eq!(tree["name"], "Message");
    assert_eq!(tree["children"][0]["raw_name"], "MSH");
    assert_eq!(tree["children"][2]["description"], "Patient Identification");
}

#[test]
fn inspect_fails_on_empty_message() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "empty.hl7", "");

    hl7view_cmd()
        .args(["inspect", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no segments"));
}

#[test]
fn export_round_trips_verbatim() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "adt.hl7", ADT_A01);
    let out = dir.path().join("copy.hl7");

    hl7view_cmd()
        .args(["export", &path, "-o", out.to_str().unwrap()])
        .assert()
        .success();

    let exported = fs::read_to_string(&out).unwrap();
    assert_eq!(exported, ADT_A01);
}

#[test]
fn export_default_name_uses_control_id() {
    let dir = tempdir().unwrap();
    let path = write_message(&dir, "adt.hl7", ADT_A01);

    hl7view_cmd()
        .current_dir(dir.path())
        .args(["export", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("hl7_message_MSG00001.hl7"));

    assert!(dir.path().join("hl7_message_MSG00001.hl7").exists());
}

#[test]
fn completion_generates_bash_script() {
    hl7view_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hl7view"));
}

#[test]
fn no_args_shows_usage() {
    hl7view_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
