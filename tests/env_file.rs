//! Integration tests for dotenv file loading
//!
//! Verifies that `EnvProvider` reads values from a dotenv file without
//! touching the process environment, and tolerates missing or broken files.

use chatgpt_cli::config::{ConfigProvider, EnvProvider, api_key};
use std::fs;
use tempfile::TempDir;

/// Helper to create temporary directory for file operations
fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

#[test]
fn test_reads_values_from_env_file() {
    let temp_dir = create_temp_dir();
    let env_path = temp_dir.path().join(".env");
    fs::write(
        &env_path,
        "# local settings\nCHATGPT_CLI_TEST_FILE_KEY=sk-from-file\nCHATGPT_CLI_TEST_QUOTED=\"two words\"\n",
    )
    .expect("Failed to write env file");

    let provider = EnvProvider::load(&env_path);

    assert_eq!(
        provider.get_value("CHATGPT_CLI_TEST_FILE_KEY").as_deref(),
        Some("sk-from-file")
    );
    assert_eq!(
        provider.get_value("CHATGPT_CLI_TEST_QUOTED").as_deref(),
        Some("two words")
    );
}

#[test]
fn test_loading_does_not_modify_process_environment() {
    let temp_dir = create_temp_dir();
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, "CHATGPT_CLI_TEST_NOT_EXPORTED=1\n").expect("Failed to write env file");

    let _provider = EnvProvider::load(&env_path);

    assert!(std::env::var("CHATGPT_CLI_TEST_NOT_EXPORTED").is_err());
}

#[test]
fn test_missing_env_file_yields_no_values() {
    let temp_dir = create_temp_dir();
    let provider = EnvProvider::load(temp_dir.path().join("does-not-exist.env"));

    assert!(provider.get_value("CHATGPT_CLI_TEST_FILE_KEY").is_none());
}

#[test]
fn test_malformed_env_file_is_ignored() {
    let temp_dir = create_temp_dir();
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, "CHATGPT_CLI_TEST_BROKEN='unterminated\n").expect("Failed to write env file");

    let provider = EnvProvider::load(&env_path);

    assert!(provider.get_value("CHATGPT_CLI_TEST_BROKEN").is_none());
}

#[test]
fn test_api_key_from_env_file() {
    // Only meaningful when the test runner does not export a real key
    if std::env::var_os("OPENAI_API_KEY").is_some() {
        return;
    }

    let temp_dir = create_temp_dir();
    let env_path = temp_dir.path().join(".env");
    fs::write(&env_path, "OPENAI_API_KEY=sk-dotenv\n").expect("Failed to write env file");

    let provider = EnvProvider::load(&env_path);

    assert_eq!(api_key(&provider).unwrap(), "sk-dotenv");
}
