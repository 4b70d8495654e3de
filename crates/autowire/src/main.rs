//! autowire - Entry Point
//!
//! Runs the injection demo against a mapping file, or lists the
//! implementations linked into the binary.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use autowire::application::ImplementationRegistry;
use autowire::infrastructure::logging::init_logging;
use autowire::{list_implementations, load_config, run_demo};
use clap::{Parser, Subcommand};

/// Command line interface for autowire
#[derive(Parser, Debug)]
#[command(name = "autowire")]
#[command(about = "autowire - Mapping-driven field injection demo")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the mapping file, overriding the configured one
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// Print injection records as JSON lines
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inject the demo bean and call it (default)
    Run,
    /// List linked implementations
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.mapping.as_deref())
        .context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let mut stdout = io::stdout().lock();
    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            let registry = Arc::new(ImplementationRegistry::linked());
            run_demo(&config, registry, cli.json, &mut stdout).context("Demo failed")?;
        }
        Command::List => list_implementations(&mut stdout)?,
    }
    Ok(())
}
