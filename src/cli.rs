//! # Command-Line Interface Module
//!
//! Clap definitions for the `chattertunes` binary.
//!
//! ## Commands
//!
//! - `interactive`: Menu-driven session on stdin/stdout (the default)
//! - `script`: Feed a file of menu input through the same loop
//! - `completion`: Print a shell completion script
//!
//! ## Examples
//!
//! ```bash
//! chattertunes
//! chattertunes script demo.txt
//! chattertunes --config ./config.json interactive
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "chattertunes")]
#[command(about = "ChatterTunes: social playlists, trending songs & music twins")]
#[command(version)]
pub struct Args {
    /// Path to a JSON configuration file
    ///
    /// Defaults to `chattertunes/config.json` in the platform config
    /// directory, which is optional.
    #[arg(short, long, global = true, env = "CHATTERTUNES_CONFIG", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// The subcommand to execute (defaults to `interactive`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start an interactive session
    ///
    /// Register, log in, add friends and songs, and ask for recommendations
    /// through numbered menus. All data lives only as long as the session.
    Interactive,

    /// Run menu input from a file
    ///
    /// Each line of the file is fed to the menus exactly as if it had been
    /// typed. Handy for demos.
    Script {
        /// File containing one menu input per line
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Generate shell completions
    ///
    /// Usage: chattertunes completion bash > ~/.local/share/bash-completion/completions/chattertunes
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
