// CLI regression tests: output shape, persistence and miette diagnostics.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

const LOGIN_SPEC: &str = "tests/fixtures/login.spec";
const LOGIN_REQUEST: &str = "tests/fixtures/login_request.yaml";

fn cli() -> Command {
    Command::cargo_bin("concept-extract").unwrap()
}

#[test]
fn extract_prints_concept_and_patched_document() {
    cli()
        .args(["extract", "--request", LOGIN_REQUEST, "--document", LOGIN_SPEC])
        .assert()
        .success()
        .stdout(
            contains("# open <inbox> as <alice>\n* log in as <alice> with password \"secret\"\n* open the <inbox> folder\n")
                .and(contains("## Read the latest message\n* open \"inbox\" as \"alice\"\n* open the latest message")),
        );
}

#[test]
fn extract_json_output() {
    let output = cli()
        .args(["extract", "-r", LOGIN_REQUEST, "-d", LOGIN_SPEC, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["invocation"], "* open \"inbox\" as \"alice\"");
    assert_eq!(value["range"]["start"], 4);
    assert_eq!(value["range"]["end"], 5);
}

#[test]
fn extract_write_persists_document() {
    let path: PathBuf = std::env::temp_dir().join(format!("concept-extract-{}.spec", std::process::id()));
    fs::copy(LOGIN_SPEC, &path).unwrap();

    cli()
        .args(["extract", "-r", LOGIN_REQUEST, "--write", "-d"])
        .arg(&path)
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    let _ = fs::remove_file(&path);
    assert_eq!(
        written,
        "# Mailbox\n\n## Read the latest message\n* open \"inbox\" as \"alice\"\n* open the latest message\n"
    );
}

#[test]
fn malformed_name_is_reported_with_miette() {
    cli()
        .args(["extract", "-r", "tests/fixtures/bad_name_request.json", "-d", LOGIN_SPEC])
        .assert()
        .failure()
        .stderr(contains("concept::name::malformed").or(contains("Malformed concept name")));
}

#[test]
fn table_subcommand_formats_table() {
    cli()
        .args(["table", "tests/fixtures/users_table.yaml"])
        .assert()
        .success()
        .stdout("     |id|name|\n     |--|----|\n     |1 |foo |\n     |2 |bar |\n");
}

#[test]
fn ragged_table_is_an_arity_error() {
    cli()
        .args(["table", "tests/fixtures/ragged_table.json"])
        .assert()
        .failure()
        .stderr(contains("concept::table::arity").or(contains("Table arity mismatch")));
}

#[test]
fn lint_flags_ambiguous_bindings() {
    cli()
        .args(["lint", "-r", "tests/fixtures/ambiguous_request.yaml"])
        .assert()
        .failure()
        .stderr(contains("users").and(contains("steps 1 and 2")));
}

#[test]
fn lint_passes_clean_request() {
    cli()
        .args(["lint", "-r", LOGIN_REQUEST])
        .assert()
        .success()
        .stdout(contains("No ambiguous table bindings."));
}

#[test]
fn extract_diff_marks_replaced_lines() {
    cli()
        .args(["extract", "-r", LOGIN_REQUEST, "-d", LOGIN_SPEC, "--diff"])
        .assert()
        .success()
        .stdout(
            contains("-* log in as \"alice\" with password \"secret\"")
                .and(contains("+* open \"inbox\" as \"alice\""))
                .and(contains(" * open the latest message")),
        );
}
