//! Integration tests for the chatgpt-cli binary
//!
//! Runs the compiled binary in an isolated working directory. Every case
//! here fails or exits before any network activity.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Run the binary with no inherited API key or log filter
fn run_cli(dir: &TempDir, args: &[&str], api_key: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatgpt-cli"));
    cmd.current_dir(dir.path())
        .args(args)
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG");
    if let Some(key) = api_key {
        cmd.env("OPENAI_API_KEY", key);
    }
    cmd.output().expect("Failed to run chatgpt-cli")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_api_key_exits_1() {
    let dir = create_temp_dir();

    let output = run_cli(&dir, &["hello", "world"], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(
        stderr_of(&output).contains("OPENAI_API_KEY is not set"),
        "stderr: {}",
        stderr_of(&output)
    );
}

#[test]
fn test_empty_api_key_exits_1() {
    let dir = create_temp_dir();

    let output = run_cli(&dir, &["hello"], Some(""));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("OPENAI_API_KEY is not set"));
}

#[test]
fn test_missing_prompt_exits_1() {
    let dir = create_temp_dir();

    let output = run_cli(&dir, &[], Some("sk-test"));

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(
        stderr_of(&output).contains("no prompt given"),
        "stderr: {}",
        stderr_of(&output)
    );
}

#[test]
fn test_env_file_in_working_directory_supplies_key() {
    let dir = create_temp_dir();
    fs::write(dir.path().join(".env"), "OPENAI_API_KEY=sk-from-dotenv\n")
        .expect("Failed to write env file");

    // The key check passes, so the failure is the missing prompt
    let output = run_cli(&dir, &[], None);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("no prompt given"), "stderr: {}", stderr);
    assert!(!stderr.contains("OPENAI_API_KEY is not set"));
}

#[test]
fn test_flag_lookalikes_are_prompt_text() {
    let dir = create_temp_dir();

    // Treated as a prompt, so the run proceeds to the key check and stops there
    for args in [
        &["--help"][..],
        &["--version"][..],
        &["--", "x"][..],
        &["--log-level", "debug"][..],
    ] {
        let output = run_cli(&dir, args, None);

        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        assert!(output.stdout.is_empty(), "args: {:?}", args);
        assert!(
            stderr_of(&output).contains("OPENAI_API_KEY is not set"),
            "args: {:?}, stderr: {}",
            args,
            stderr_of(&output)
        );
    }
}
