//! Telemetry and observability setup
//!
//! Configures structured logging with tracing and tracing-subscriber.
//! Log output goes to stderr; stdout carries only the model's reply.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Level for this crate's logs when RUST_LOG is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialize tracing subscriber for structured logging
///
/// This can only be called once per process. Subsequent calls are silently ignored.
///
/// Reads the filter from the RUST_LOG environment variable, defaulting to
/// `chatgpt_cli=<default_level>`.
///
/// # Examples
///
/// ```no_run
/// chatgpt_cli::telemetry::init("debug");
/// tracing::debug!("Sending request");
/// ```
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter(default_level)));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    });
}

fn default_filter(level: &str) -> String {
    format!("chatgpt_cli={}", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_targets_crate() {
        assert_eq!(default_filter("debug"), "chatgpt_cli=debug");
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter(DEFAULT_LOG_LEVEL)).is_ok());
    }
}
