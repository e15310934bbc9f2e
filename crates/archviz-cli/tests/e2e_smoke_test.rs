//! End-to-end smoke tests for the CLI pipeline.
//!
//! These drive `run()` with the `dot` output format so they pass on machines
//! without Graphviz installed.

use std::{fs, path::PathBuf, process::Command};

use tempfile::tempdir;

use archviz_cli::{Args, run};

fn args_for(output: Option<String>, format: &str) -> Args {
    Args {
        output,
        format: format.to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_generates_dot_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("architecture.dot");

    let args = args_for(Some(output_path.to_string_lossy().to_string()), "dot");
    let report = run(&args).expect("Generation should succeed");

    assert_eq!(report.output, output_path);
    assert_eq!(report.nodes, 33);
    assert_eq!(report.edges, 51);

    let contents = fs::read_to_string(&output_path).expect("Output file should exist");
    assert!(contents.starts_with("digraph"));
    assert!(contents.contains("subgraph cluster_frontend"));
    assert!(contents.contains("Smart Coach System Architecture"));
}

#[test]
fn e2e_runs_are_structurally_identical() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let first_path = temp_dir.path().join("first.dot");
    let second_path = temp_dir.path().join("second.dot");

    run(&args_for(
        Some(first_path.to_string_lossy().to_string()),
        "dot",
    ))
    .expect("First run should succeed");
    run(&args_for(
        Some(second_path.to_string_lossy().to_string()),
        "dot",
    ))
    .expect("Second run should succeed");

    let first = fs::read_to_string(first_path).expect("First output should exist");
    let second = fs::read_to_string(second_path).expect("Second output should exist");
    assert_eq!(first, second, "Re-running must not change the graph");
}

#[test]
fn e2e_default_output_name_is_the_slugified_title() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    // The default output path is relative to the working directory, so run
    // from inside the temp directory. The other tests pass absolute paths
    // and are unaffected.
    std::env::set_current_dir(temp_dir.path()).expect("Failed to enter temp directory");

    let report = run(&args_for(None, "dot")).expect("Generation should succeed");

    assert_eq!(
        report.output,
        PathBuf::from("smart_coach_system_architecture.dot")
    );
    assert!(
        temp_dir
            .path()
            .join("smart_coach_system_architecture.dot")
            .exists(),
        "Default-named output file should be written to the working directory"
    );
}

#[test]
fn e2e_binary_swallows_failures_and_exits_zero() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    // An unknown format makes the generation call fail; the binary must
    // still report the failure on stdout and terminate with exit code 0.
    let output = Command::new(env!("CARGO_BIN_EXE_archviz"))
        .current_dir(temp_dir.path())
        .args(["--format", "bmp", "--log-level", "off"])
        .output()
        .expect("Failed to spawn archviz binary");

    assert!(
        output.status.success(),
        "Failures must be swallowed, got {:?}",
        output.status
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("❌ Error generating diagram"),
        "Missing error line in: {stdout}"
    );
    assert!(
        stdout.contains("💡 Make sure Graphviz is installed"),
        "Missing install hint in: {stdout}"
    );
}

#[test]
fn e2e_binary_success_prints_two_status_lines() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let output = Command::new(env!("CARGO_BIN_EXE_archviz"))
        .current_dir(temp_dir.path())
        .args(["--format", "dot", "--log-level", "off"])
        .output()
        .expect("Failed to spawn archviz binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "✅ Architecture diagram generated as 'smart_coach_system_architecture.dot'"
    ));
    assert!(stdout.contains("📊 33 nodes and 51 edges"));
    assert!(
        temp_dir
            .path()
            .join("smart_coach_system_architecture.dot")
            .exists()
    );
}

#[test]
fn e2e_unknown_format_is_an_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("architecture.bmp");

    let args = args_for(Some(output_path.to_string_lossy().to_string()), "bmp");
    let result = run(&args);
    assert!(result.is_err(), "Unknown format should be rejected");
    assert!(!output_path.exists(), "No file should be written on error");
}

#[test]
fn e2e_style_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nbackground_color = \"ivory\"\n")
        .expect("Failed to write config");
    let output_path = temp_dir.path().join("architecture.dot");

    let mut args = args_for(Some(output_path.to_string_lossy().to_string()), "dot");
    args.config = Some(config_path.to_string_lossy().to_string());
    run(&args).expect("Generation with config should succeed");

    let contents = fs::read_to_string(&output_path).expect("Output file should exist");
    assert!(contents.contains("bgcolor=\"ivory\""));
}

#[test]
fn e2e_missing_explicit_config_is_an_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("architecture.dot");

    let mut args = args_for(Some(output_path.to_string_lossy().to_string()), "dot");
    args.config = Some(
        temp_dir
            .path()
            .join("does-not-exist.toml")
            .to_string_lossy()
            .to_string(),
    );
    assert!(run(&args).is_err(), "Missing explicit config should fail");
}
