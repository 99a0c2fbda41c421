//! chatgpt-cli - single-shot command-line client for OpenAI chat completions
//!
//! Takes a prompt, sends it to the chat-completions endpoint as one user
//! message, and returns the first reply verbatim.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
