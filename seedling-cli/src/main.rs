//! seedling CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use seedling::{ScaffoldOptions, ScaffoldOrchestrator, SeedlingConfig, SeedlingError};
use seedling_cli_lib::{NewCommand, TerminalPrompt};

#[derive(Parser)]
#[command(name = "seedling")]
#[command(version)]
#[command(about = "Scaffold a new project from a template", long_about = None)]
struct Cli {
    /// Directory to create the project in (asked for when omitted)
    target_dir: Option<String>,

    /// Template to use: vanilla, vanilla-ts, vite, vite-lib, static
    #[arg(short, long)]
    template: Option<String>,

    /// Configuration file, on top of the standard locations
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (-v, -vv); `RUST_LOG` overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    seedling::observability::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "scaffolding failed");
            if is_cancelled(&err) {
                eprintln!("{} Operation cancelled", style("✖").red());
            } else {
                eprintln!("{} {err:#}", style("✖").red());
            }
            ExitCode::FAILURE
        }
    }
}

/// Whether any cause in the chain is a cancelled prompt
fn is_cancelled(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<SeedlingError>()
            .is_some_and(SeedlingError::is_cancelled)
    })
}

fn run(cli: Cli) -> Result<()> {
    let config =
        SeedlingConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;

    let command = NewCommand::new(
        ScaffoldOrchestrator::new(config, cwd),
        ScaffoldOptions {
            target_dir: cli.target_dir,
            template: cli.template,
        },
    );
    command.execute(&mut TerminalPrompt::new())
}
