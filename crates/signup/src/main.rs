//! Sign-up form - terminal entry point.
//!
//! Reads line commands from stdin, forwards them to a form session and
//! renders every view on stdout. Logs go to stderr.

mod cli;
mod commands;
mod render;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::{AppResult, FormConfig};
use signup_form::FormSession;

use crate::cli::Cli;
use crate::commands::{parse_line, Command, HELP};
use crate::render::{OutputFormat, TerminalRenderer};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration, flags win over the environment
    let mut config = FormConfig::from_env();
    cli.apply(&mut config);
    tracing::debug!(?config, "Configuration loaded");

    if let Err(e) = run(config, cli.output_format()).await {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: FormConfig, format: OutputFormat) -> AppResult<()> {
    let handle = FormSession::spawn(&config, TerminalRenderer::new(format));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            None => {}
            Some(Command::Event(event)) => {
                // A stopped session keeps its cause; teardown below reports it
                if handle.send(event).await.is_err() {
                    break;
                }
            }
            Some(Command::Wait(duration)) => tokio::time::sleep(duration).await,
            Some(Command::Help) => eprintln!("{}", HELP),
            Some(Command::Unknown(input)) => {
                tracing::warn!("Unknown command {:?}, type `help` for usage", input)
            }
            Some(Command::Quit) => break,
        }
    }

    // Unmount: pending feedback updates are dropped
    let view = handle.teardown().await?;
    tracing::info!(submission = ?view.submission, "Form closed");
    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
