//! One invocation of chatgpt-cli
//!
//! Validates configuration and prompt before any network activity, performs
//! the chat-completion exchange, and maps the outcome to output and an exit
//! status.

use crate::cli::join_prompt;
use crate::client::{ChatCompletionClient, Transport};
use crate::config::{ConfigProvider, api_key};
use crate::error::AppResult;
use std::io::Write;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Resolve the API key and prompt, then send one chat-completion request
///
/// The key is checked first, then the prompt. Either failing means the
/// transport is never called.
pub async fn execute<T: Transport>(
    prompt_args: &[String],
    provider: &dyn ConfigProvider,
    client: &ChatCompletionClient<T>,
) -> AppResult<String> {
    let api_key = api_key(provider)?;
    let prompt = join_prompt(prompt_args)?;
    client.complete(&api_key, &prompt).await
}

/// Run [`execute`] and report the outcome
///
/// On success the reply and a trailing newline go to `out`. On failure the
/// error message goes to `err` and nothing is written to `out`.
pub async fn run<T, O, E>(
    prompt_args: &[String],
    provider: &dyn ConfigProvider,
    client: &ChatCompletionClient<T>,
    out: &mut O,
    err: &mut E,
) -> u8
where
    T: Transport,
    O: Write,
    E: Write,
{
    match execute(prompt_args, provider, client).await {
        Ok(reply) => {
            if let Err(e) = writeln!(out, "{}", reply).and_then(|_| out.flush()) {
                let _ = writeln!(err, "Failed to write reply: {}", e);
                return EXIT_FAILURE;
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Invocation failed");
            let _ = writeln!(err, "{}", e);
            EXIT_FAILURE
        }
    }
}
