// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! clawpath - session path diagnostics

mod commands;
mod env;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clawpath_paths::SessionPaths;
use commands::{dirs, resolve, transcript, validate};

#[derive(Parser)]
#[command(
    name = "clawpath",
    version,
    about = "Resolve per-agent session directories and transcript paths"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    /// Ignore `.env` files in the working and state directories
    #[arg(long, global = true)]
    no_dotenv: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an agent's sessions directory
    SessionsDir(dirs::SessionsDirArgs),
    /// Print the resolved session store path
    StorePath(dirs::StorePathArgs),
    /// Print the transcript path for a session
    Transcript(transcript::TranscriptArgs),
    /// Resolve a stored session file path against a sessions directory
    Resolve(resolve::ResolveArgs),
    /// Check a session id
    Validate(validate::ValidateArgs),
}

pub(crate) fn cli_command() -> clap::Command {
    Cli::command()
}

fn main() {
    setup_logging();
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays machine-readable.
fn setup_logging() {
    use std::io::IsTerminal;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    // `validate` never touches the environment
    if let Commands::Validate(args) = command {
        return validate::handle(args, format);
    }

    let paths = SessionPaths::new(env::load(cli.no_dotenv)?);

    match command {
        Commands::SessionsDir(args) => dirs::handle_sessions_dir(args, &paths, format)?,
        Commands::StorePath(args) => dirs::handle_store_path(args, &paths, format)?,
        Commands::Transcript(args) => transcript::handle(args, &paths, format)?,
        Commands::Resolve(args) => resolve::handle(args, &paths, format)?,
        Commands::Validate(args) => validate::handle(args, format)?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
