//! Configuration values for chatgpt-cli
//!
//! The only configuration value is the API key. It comes from the process
//! environment, falling back to a dotenv file. Lookups go through
//! [`ConfigProvider`] so tests can use an in-memory map instead.

use crate::error::{AppError, AppResult};
use std::collections::HashMap;
use std::env::{self, VarError};
use std::path::Path;

/// Name of the variable holding the API key
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Default dotenv file, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Source of string configuration values
pub trait ConfigProvider {
    fn get_value(&self, key: &str) -> Option<String>;
}

impl ConfigProvider for HashMap<String, String> {
    fn get_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Process environment layered over a dotenv file
///
/// A variable present in the process environment always wins, even when it is
/// empty. The dotenv file only fills in variables the environment lacks. The
/// process environment itself is never modified.
#[derive(Debug, Clone, Default)]
pub struct EnvProvider {
    file_values: HashMap<String, String>,
}

impl EnvProvider {
    /// Load the dotenv file at `path`
    ///
    /// A missing file is not an error. A file that cannot be parsed is logged
    /// and ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        let file_values = match read_env_file(path) {
            Ok(values) => {
                tracing::debug!(
                    path = %path.display(),
                    variables = values.len(),
                    "Loaded dotenv file"
                );
                values
            }
            Err(e) if e.not_found() => {
                tracing::info!(
                    path = %path.display(),
                    "No dotenv file found, using system environment"
                );
                HashMap::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read dotenv file, using system environment"
                );
                HashMap::new()
            }
        };

        Self { file_values }
    }

    /// Build a provider from already-parsed dotenv values
    pub fn from_file_values(file_values: HashMap<String, String>) -> Self {
        Self { file_values }
    }
}

fn read_env_file(path: &Path) -> dotenvy::Result<HashMap<String, String>> {
    dotenvy::from_path_iter(path)?.collect()
}

impl ConfigProvider for EnvProvider {
    fn get_value(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => self.file_values.get(key).cloned(),
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(key, "Environment variable is not valid UTF-8, ignoring");
                None
            }
        }
    }
}

/// Read the API key, rejecting a missing or empty value
pub fn api_key(provider: &dyn ConfigProvider) -> AppResult<String> {
    match provider.get_value(API_KEY_VAR) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(AppError::Config(format!("{} is not set", API_KEY_VAR))),
    }
}
