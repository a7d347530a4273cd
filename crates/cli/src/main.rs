// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! tempo - scheduled job instance compiler

mod commands;
mod env;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{compile, window};

#[derive(Parser)]
#[command(
    name = "tempo",
    version,
    about = "Tempo - resolve data windows and compile job instances"
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

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the data window of a scheduled run
    Window(window::WindowArgs),
    /// Compile the environment and files of a job instance
    Compile(compile::CompileArgs),
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

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` overrides
/// the default `warn` level.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped. Otherwise the full chain is rendered.
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

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided: print help and exit 0
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Window(args) => window::handle(args, format),
        Commands::Compile(args) => compile::handle(args, format),
    }
}

#[cfg(test)]
fn cli_command() -> clap::Command {
    use clap::CommandFactory;
    Cli::command()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
