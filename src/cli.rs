//! Command-line interface for chatgpt-cli
//!
//! Provides argument parsing and prompt assembly for the chatgpt-cli binary.
//! Every argument after the binary name is prompt text, including words that
//! look like flags (`--help`, `-V`, `--`).

use crate::error::{AppError, AppResult};
use clap::Parser;
use std::ffi::OsString;

/// Send a prompt to the OpenAI chat-completions API and print the reply
#[derive(Parser, Debug)]
#[command(name = "chatgpt-cli")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(
    long_about = "Sends the prompt as a single user message to gpt-4o-mini and prints the \
    first reply to stdout. OPENAI_API_KEY is read from the environment, or from ./.env \
    when the environment does not define it. RUST_LOG controls diagnostics on stderr."
)]
pub struct Cli {
    /// Prompt text; multiple words are joined with single spaces
    #[arg(value_name = "PROMPT")]
    pub prompt: Vec<String>,
}

impl Cli {
    /// Parse `argv` (binary name first) treating every remaining token as prompt text
    ///
    /// An escape `--` is inserted after the binary name, so clap never
    /// interprets the user's tokens as options or as its own escape.
    ///
    /// # Errors
    /// Returns the clap error when an argument is not valid UTF-8.
    pub fn from_args<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let bin = argv.next().unwrap_or_else(|| OsString::from("chatgpt-cli"));
        Self::try_parse_from([bin, OsString::from("--")].into_iter().chain(argv))
    }
}

/// Join prompt arguments with single spaces, preserving order
///
/// # Errors
/// Returns [`AppError::Config`] if there are no arguments or they join to an
/// empty string.
pub fn join_prompt(args: &[String]) -> AppResult<String> {
    let prompt = args.join(" ");
    if prompt.is_empty() {
        return Err(AppError::Config(
            "no prompt given\nusage: chatgpt-cli <PROMPT>...".to_string(),
        ));
    }
    Ok(prompt)
}
