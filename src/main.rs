//! # ChatterTunes
//!
//! Register, befriend other users, build a playlist and get recommendations
//! from your friends' playlists. Everything lives in memory for the length
//! of one run.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive menus
//! chattertunes
//!
//! # Replay menu input from a file
//! chattertunes script demo.txt
//!
//! # Shell completions
//! chattertunes completion bash
//! ```

use anyhow::{Context, Result};
use chattertunes::cli::{self, Command};
use chattertunes::completion;
use chattertunes::config::RuntimeConfig;
use chattertunes::shell::Shell;
use chattertunes::system::ChatterTunes;
use clap::{CommandFactory, Parser};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufReader};

/// Main entry point for the ChatterTunes application.
///
/// Logging is controlled via `RUST_LOG`:
/// - `RUST_LOG=debug chattertunes` - Enable debug logging
/// - `RUST_LOG=chattertunes::recommend=trace chattertunes` - Module-specific logging
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();
    debug!("Parsed arguments: {args:?}");

    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let config = RuntimeConfig::load(args.config.as_deref())?;
            let mut system = ChatterTunes::new(&config);
            info!("Starting interactive session");
            Shell::new(&mut system, io::stdin().lock(), io::stdout().lock())
                .show_banner(config.show_banner)
                .run()?;
        }
        Command::Script { file } => {
            let config = RuntimeConfig::load(args.config.as_deref())?;
            let input = File::open(&file)
                .with_context(|| format!("Failed to open script {}", file.display()))?;
            let mut system = ChatterTunes::new(&config);
            info!("Running script {}", file.display());
            Shell::new(&mut system, BufReader::new(input), io::stdout().lock())
                .show_banner(config.show_banner)
                .run()?;
        }
        Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(
                completion::shell_to_completion_shell(&shell),
                &mut cmd,
                &mut io::stdout(),
            );
        }
    }

    Ok(())
}
