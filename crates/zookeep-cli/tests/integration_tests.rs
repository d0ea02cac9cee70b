//! End-to-end tests for the `zookeep` binary.
//!
//! These run the real binary with `assert_cmd`, so they cover argument
//! parsing, config defaults, rendering, and exit codes in one pass.

use assert_cmd::Command;
use predicates::prelude::*;

fn zookeep() -> Command {
    let mut cmd = Command::cargo_bin("zookeep").unwrap();
    // Keep the host environment out of the assertions.
    cmd.env_remove("NO_COLOR");
    cmd.env_remove("ZOOKEEP_OUTPUT__NO_COLOR");
    cmd.env_remove("ZOOKEEP_DEFAULTS__PAYROLL_FORMAT");
    cmd
}

// ── Global flags ──────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    zookeep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("payroll"))
        .stdout(predicate::str::contains("zoo"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo() {
    zookeep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_subcommand_shows_help_and_fails() {
    zookeep().assert().failure();
}

#[test]
fn unknown_subcommand_exits_2() {
    zookeep().arg("feed").assert().code(2);
}

// ── payroll ───────────────────────────────────────────────────────────────────

#[test]
fn payroll_greets_and_lists_by_ascending_salary() {
    let output = zookeep().arg("payroll").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Hello world!"));

    // Ascending salary order: cheapest first.
    let expected = [
        "Name: John Salary: 50000",
        "Name: Jane Salary: 60000",
        "Name: Jake Salary: 75000",
        "Name: Emily Salary: 90000",
        "Name: Mike Salary: 120000",
    ];
    let mut last = 0;
    for line in expected {
        let pos = stdout.find(line).unwrap_or_else(|| panic!("missing: {line}"));
        assert!(pos >= last, "out of order: {line}");
        last = pos;
    }
}

#[test]
fn payroll_alias_pay_works() {
    zookeep()
        .arg("pay")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: John Salary: 50000"));
}

#[test]
fn payroll_list_format_omits_greeting() {
    zookeep()
        .args(["payroll", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello world!").not())
        .stdout(predicate::str::contains("Name: John Salary: 50000"));
}

#[test]
fn payroll_group_shows_only_populated_brackets() {
    let output = zookeep().args(["payroll", "--group"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    assert!(stdout.contains("Below 60,000"));
    assert!(stdout.contains("60,000 - 100,000"));
    assert!(stdout.contains("Above 100,000"));

    // Lower bracket holds only John.
    assert!(stdout.contains("Name: John Salary: 50000"));

    // Bucket order is ascending.
    let lower = stdout.find("Below 60,000").unwrap();
    let upper = stdout.find("Above 100,000").unwrap();
    assert!(lower < upper);
}

#[test]
fn payroll_bracket_filters_to_one_bucket() {
    zookeep()
        .args(["payroll", "--bracket", "upper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Mike Salary: 120000"))
        .stdout(predicate::str::contains("John").not());
}

#[test]
fn payroll_unknown_bracket_exits_2_with_suggestions() {
    zookeep()
        .args(["payroll", "--bracket", "executive"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("executive"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn payroll_group_conflicts_with_bracket() {
    zookeep()
        .args(["payroll", "--group", "--bracket", "upper"])
        .assert()
        .code(2);
}

#[test]
fn payroll_csv_has_header_and_rows() {
    zookeep()
        .args(["payroll", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name,salary"))
        .stdout(predicate::str::contains("John,50000"))
        .stdout(predicate::str::contains("Mike,120000"));
}

#[test]
fn payroll_json_is_parseable_and_sorted() {
    let output = zookeep()
        .args(["payroll", "--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let roster = parsed.as_array().unwrap();
    assert_eq!(roster.len(), 5);
    assert_eq!(roster[0]["name"], "John");
    assert_eq!(roster[4]["salary"], 120_000);
}

#[test]
fn payroll_format_default_from_env_config() {
    // defaults.payroll_format comes from the config layer; the env source
    // overrides the built-in "table".
    zookeep()
        .env("ZOOKEEP_DEFAULTS__PAYROLL_FORMAT", "csv")
        .arg("payroll")
        .assert()
        .success()
        .stdout(predicate::str::contains("name,salary"));
}

#[test]
fn payroll_quiet_suppresses_stdout() {
    zookeep()
        .args(["--quiet", "payroll"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn payroll_explicit_missing_config_exits_4() {
    zookeep()
        .args(["--config", "/definitely/not/here.toml", "payroll"])
        .assert()
        .code(4);
}

// ── zoo ───────────────────────────────────────────────────────────────────────

#[test]
fn zoo_tour_presents_sounds_then_respiration() {
    let output = zookeep().arg("zoo").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let canid = stdout.find("General canidae is making a sound").unwrap();
    let dog = stdout.find("Greyhound is making a sound").unwrap();
    let rose = stdout
        .find("Rose is respiring through photosynthesis.")
        .unwrap();
    assert!(canid < dog && dog < rose);
}

#[test]
fn zoo_sounds_only() {
    zookeep()
        .args(["zoo", "--sounds"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is making a sound"))
        .stdout(predicate::str::contains("photosynthesis").not());
}

#[test]
fn zoo_respiration_only() {
    zookeep()
        .args(["zoo", "--respiration"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rose is respiring through photosynthesis.",
        ))
        .stdout(predicate::str::contains("making a sound").not());
}

#[test]
fn zoo_respire_asks_every_organism() {
    let output = zookeep().args(["zoo", "--respire"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    // Most-derived override per kind, plants answering for themselves.
    let canid = stdout.find("Canidae is panting.").unwrap();
    let dog = stdout.find("Dog is panting.").unwrap();
    let rose = stdout
        .find("Rose is respiring through photosynthesis.")
        .unwrap();
    assert!(canid < dog && dog < rose);
    assert!(!stdout.contains("making a sound"));
}

#[test]
fn zoo_selectors_conflict() {
    zookeep()
        .args(["zoo", "--sounds", "--respiration"])
        .assert()
        .code(2);
}

#[test]
fn zoo_json_bundles_tour_lines() {
    let output = zookeep()
        .args(["--output-format", "json", "zoo"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["zoo"], "Zookeep City Zoo");
    assert_eq!(parsed["lines"].as_array().unwrap().len(), 3);
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_bash_mentions_binary() {
    zookeep()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zookeep"));
}
