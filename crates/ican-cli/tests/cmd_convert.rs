//! Integration tests for `ican to-bcan`, `ican from-bcan` and
//! `ican validate-bcan`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `ican` binary.
fn ican_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("ican");
    path
}

fn ican(args: &[&str]) -> Output {
    Command::new(ican_bin())
        .args(args)
        .output()
        .expect("run ican")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// to-bcan
// ---------------------------------------------------------------------------

#[test]
fn to_bcan_default_separator_is_space() {
    let out = ican(&["to-bcan", "BE68 5390 0754 7034"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "539 0075470 34\n");
}

#[test]
fn to_bcan_custom_separator() {
    let out = ican(&["to-bcan", "--separator", "-", "BE68539007547034"]);
    assert_eq!(stdout(&out), "539-0075470-34\n");
}

#[test]
fn to_bcan_unknown_country_exits_2() {
    let out = ican(&["to-bcan", "ZZ68539007547034"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown country"), "stderr: {stderr}");
}

#[test]
fn to_bcan_structure_mismatch_exits_1() {
    let out = ican(&["to-bcan", "BE68ABC"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

// ---------------------------------------------------------------------------
// from-bcan
// ---------------------------------------------------------------------------

#[test]
fn from_bcan_builds_code() {
    let out = ican(&["from-bcan", "BE", "539007547034"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "BE68539007547034\n");
}

#[test]
fn from_bcan_ignores_separators() {
    let out = ican(&["from-bcan", "BE", "539-0075470-34"]);
    assert_eq!(stdout(&out), "BE68539007547034\n");
}

#[test]
fn from_bcan_wrong_length_exits_1() {
    let out = ican(&["from-bcan", "BE", "1539-0075470-34"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid BCAN"), "stderr: {stderr}");
}

#[test]
fn from_bcan_unknown_country_exits_2() {
    let out = ican(&["from-bcan", "ZZ", "539007547034"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn from_bcan_json() {
    let out = ican(&["from-bcan", "-f", "json", "NL", "INGB0002445588"]);
    let value: serde_json::Value = serde_json::from_str(stdout(&out).trim_end()).expect("JSON");
    assert_eq!(value["code"], "NL86INGB0002445588");
}

#[test]
fn from_bcan_output_round_trips_through_to_bcan() {
    let full = ican(&["from-bcan", "GB", "NWBK 601613 31926819"]);
    let code = stdout(&full);
    let split = ican(&["to-bcan", code.trim_end()]);
    assert_eq!(stdout(&split), "NWBK 601613 31926819\n");
}

// ---------------------------------------------------------------------------
// validate-bcan
// ---------------------------------------------------------------------------

#[test]
fn validate_bcan_valid_exits_0() {
    let out = ican(&["validate-bcan", "NL", "INGB0002445588"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
fn validate_bcan_bad_format_exits_1() {
    let out = ican(&["validate-bcan", "BE", "ABC-0075470-34"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn validate_bcan_unknown_country_exits_2() {
    let out = ican(&["validate-bcan", "ZZ", "539007547034"]);
    assert_eq!(out.status.code(), Some(2));
}
