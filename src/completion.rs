//! # Shell Completion Module
//!
//! Completion scripts for the `chattertunes` binary via `clap_complete`.
//!
//! ```bash
//! chattertunes completion bash > ~/.local/share/bash-completion/completions/chattertunes
//! chattertunes completion zsh > ~/.config/zsh/completions/_chattertunes
//! ```

use crate::cli::Shell;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io::Write;

/// Write completions for `cmd` to `out`.
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(gen, cmd, name, out);
}

/// Convert our CLI shell enum to clap_complete's shell enum
#[must_use]
pub fn shell_to_completion_shell(shell: &Shell) -> CompletionShell {
    match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::CommandFactory;

    #[test]
    fn test_bash_completion_mentions_subcommands() {
        let mut cmd = Args::command();
        let mut out = Vec::new();
        generate_completions(shell_to_completion_shell(&Shell::Bash), &mut cmd, &mut out);

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("chattertunes"));
        assert!(script.contains("script"));
        assert!(script.contains("interactive"));
    }

    #[test]
    fn test_shell_mapping() {
        assert_eq!(shell_to_completion_shell(&Shell::Fish), CompletionShell::Fish);
        assert_eq!(shell_to_completion_shell(&Shell::PowerShell), CompletionShell::PowerShell);
    }
}
