//! End-to-end tests for the file-driven workflow and the `compkeys` binary.

use super::common::{fixture, keys};
use compkeys::build::{run_filter, run_index};
use std::process::Command;

const CONFIG: &str = r#"{"compositeIdxLabels": ["status", "owner"], "ignoreCase": true}"#;

#[test]
fn test_stored_keys_answer_query() {
    let doc = fixture(
        r#"{"status": "Open", "owner": "alice", "title": {"tokenizer": "biunigrams", "value": "fix"}}"#,
        Some(CONFIG),
    );
    let query = fixture(r#"{"status": "open", "owner": "ALICE"}"#, Some(CONFIG));

    let stored = run_index(&doc.input, doc.config.as_deref()).unwrap();
    let lookup = run_filter(&query.input, query.config.as_deref()).unwrap();

    assert_eq!(lookup, keys(&["3 open;alice"]));
    assert!(lookup.is_subset(&stored));
}

#[test]
fn test_run_index_without_config() {
    let fx = fixture(r#"{"a": "1", "b": "2"}"#, None);
    let built = run_index(&fx.input, None).unwrap();
    assert_eq!(built, keys(&["a 1", "b 2"]));
}

#[test]
fn test_run_index_reports_limit() {
    let tokens: Vec<String> = (0..600).map(|i| format!("\"t{}\"", i)).collect();
    let fx = fixture(&format!(r#"{{"many": [{}]}}"#, tokens.join(",")), None);
    let err = run_index(&fx.input, None).unwrap_err();
    assert!(err.contains("index size 600 exceeds 512"), "{}", err);
}

#[test]
fn test_run_filter_missing_input() {
    let fx = fixture("{}", None);
    let missing = fx.dir.path().join("missing.json");
    assert!(run_filter(&missing, None).is_err());
}

// ============================================================================
// BINARY
// ============================================================================

fn compkeys() -> Command {
    Command::new(env!("CARGO_BIN_EXE_compkeys"))
}

#[test]
fn test_cli_index_prints_sorted_keys() {
    let fx = fixture(r#"{"status": "open", "owner": "alice"}"#, Some(CONFIG));
    let output = compkeys()
        .arg("index")
        .arg("--input")
        .arg(&fx.input)
        .arg("--config")
        .arg(fx.config.as_ref().unwrap())
        .output()
        .expect("Failed to run compkeys");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["3 open;alice", "owner alice", "status open"]
    );
}

#[test]
fn test_cli_validate_fails_with_exit_code() {
    let fx = fixture(
        "{}",
        Some(r#"{"compositeIdxLabels": ["1","2","3","4","5","6","7","8","9"]}"#),
    );
    let output = compkeys()
        .arg("validate")
        .arg("--config")
        .arg(fx.config.as_ref().unwrap())
        .output()
        .expect("Failed to run compkeys");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("exceeds 8"), "{}", stderr);
}

#[test]
fn test_cli_in() {
    let output = compkeys()
        .args(["in", "--values", "a,b,c,d", "--doc", "a,c", "--query", "c"])
        .output()
        .expect("Failed to run compkeys");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("doc 13\n"), "{}", stdout);
    assert!(stdout.ends_with("query 4\n"), "{}", stdout);
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let fx = fixture(r#"{"status": "open", "owner": "alice"}"#, Some(CONFIG));
    let run = |verbose: bool| {
        let mut cmd = compkeys();
        if verbose {
            cmd.arg("-v");
        }
        cmd.arg("index")
            .arg("--input")
            .arg(&fx.input)
            .arg("--config")
            .arg(fx.config.as_ref().unwrap())
            .output()
            .expect("Failed to run compkeys")
    };

    let quiet = run(false);
    let verbose = run(true);
    assert!(quiet.status.success() && verbose.status.success());

    let quiet_err = String::from_utf8(quiet.stderr).unwrap();
    let verbose_err = String::from_utf8(verbose.stderr).unwrap();
    assert!(!quiet_err.contains("2 fields from"), "{}", quiet_err);
    assert!(verbose_err.contains("2 fields from"), "{}", verbose_err);

    // log output never reaches stdout
    assert_eq!(quiet.stdout, verbose.stdout);
}
