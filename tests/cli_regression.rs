// Regression tests for the `prejspy` binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn prejspy() -> Command {
    Command::cargo_bin("prejspy").unwrap()
}

#[test]
fn cli_parse_prints_json_tree() {
    prejspy()
        .args(["parse", "1 + x"])
        .assert()
        .success()
        .stdout(contains("\"type\": \"BinaryExpression\"").and(contains("\"name\": \"x\"")));
}

#[test]
fn cli_parse_pretty() {
    prejspy()
        .args(["parse", "--pretty", "a ? b : c * 2"])
        .assert()
        .success()
        .stdout("(? a b (* c 2))\n");
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    prejspy()
        .args(["parse", "(1 + 2"])
        .assert()
        .failure()
        .stderr(contains("prejspy::parse").and(contains("Unclosed '('")));
}

#[test]
fn cli_parse_with_config_file() {
    let config_file = "tests/cli_no_calls.json";
    fs::write(config_file, r#"{"Features": {"Calls": false}}"#).unwrap();

    prejspy()
        .args(["parse", "f(x)", "--config", config_file])
        .assert()
        .failure()
        .stderr(contains("Unexpected function call"));

    let _ = fs::remove_file(config_file);
}

#[test]
fn cli_missing_config_file() {
    prejspy()
        .args(["config", "--config", "tests/no-such-config.json"])
        .assert()
        .failure()
        .stderr(contains("prejspy::io"));
}

#[test]
fn cli_config_prints_defaults() {
    prejspy()
        .arg("config")
        .assert()
        .success()
        .stdout(contains("\"Operators\"").and(contains("\">>>\": 8")));
}

#[test]
fn cli_test_runs_fixture_corpus() {
    prejspy()
        .args(["test", "tests/fixtures"])
        .assert()
        .success()
        .stdout(contains("0 failed"));
}

#[test]
fn cli_fixture_records_error() {
    prejspy()
        .args(["fixture", "a ?", "--message", "dangling question mark"])
        .assert()
        .success()
        .stdout(
            contains("\"error\": \"Expected expression at character 3\"")
                .and(contains("\"message\": \"dangling question mark\"")),
        );
}
