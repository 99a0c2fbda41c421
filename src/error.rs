//! Error types for chatgpt-cli
//!
//! Every failure is terminal for the invocation. The binary prints the
//! `Display` form of the error to stderr and exits with status 1.

use thiserror::Error;

/// Boxed error returned by [`crate::client::Transport`] implementations
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing API key or missing prompt. Raised before any network activity.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// DNS, TCP, TLS, timeout or body read failure
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: BoxError,
    },

    /// Non-200 status. `body` is the raw response text, never parsed.
    #[error("API error: {status}\n{body}")]
    Api { status: String, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("No response from model: choices array was empty")]
    EmptyResponse,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;
