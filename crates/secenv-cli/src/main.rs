//! secenv CLI
//!
//! The command-line surface for the prompt segment engine. The `info`,
//! `warning` and `segment` commands are invoked from a shell prompt hook
//! on every redraw; everything they print lands inside the prompt, so
//! diagnostics stay on stderr and failures degrade to empty output.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose; stdout belongs to the prompt
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let env = secenv_core::snapshot_env();

    match cli.command {
        Some(Commands::Info { dir }) => commands::run_info(&target_dir(dir)?, &env),
        Some(Commands::Warning { dir }) => commands::run_warning(&target_dir(dir)?, &env),
        Some(Commands::Segment { dir }) => commands::run_segment(&target_dir(dir)?, &env),
        Some(Commands::Config) => commands::run_config(&env),
        Some(Commands::Validate { path }) => commands::run_validate(path.as_deref(), &env),
        Some(Commands::Hook { shell }) => commands::run_hook(&shell),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "secenv", &mut std::io::stdout());
            Ok(0)
        }
        None => {
            // No command provided - show help hint
            println!(
                "{} secrets environment prompt segment",
                "secenv".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "secenv --help".cyan());
            Ok(0)
        }
    }
}

/// Explicit directory argument, or the process working directory
fn target_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}
