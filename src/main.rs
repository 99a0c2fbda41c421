//! chatgpt-cli binary
//!
//! Sends the prompt given on the command line and prints the model's reply.

use chatgpt_cli::{
    app::{self, EXIT_FAILURE},
    cli::Cli,
    client::{ChatCompletionClient, ClientOptions},
    config::{DEFAULT_ENV_FILE, EnvProvider},
    telemetry,
};
use std::io;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    telemetry::init(telemetry::DEFAULT_LOG_LEVEL);

    tracing::debug!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let provider = EnvProvider::load(DEFAULT_ENV_FILE);

    let client = match ChatCompletionClient::with_reqwest(ClientOptions::default()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let code = app::run(
        &cli.prompt,
        &provider,
        &client,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;

    ExitCode::from(code)
}
