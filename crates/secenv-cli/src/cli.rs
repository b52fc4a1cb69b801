//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// secenv - secrets-manager environment segment for your shell prompt
#[derive(Parser, Debug)]
#[command(name = "secenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render the colored prompt segment
    ///
    /// Prints the segment for the working directory and exits 0, or
    /// prints nothing and exits 1 when no project/config is active.
    /// When the prompt is disabled it prints nothing and exits 0.
    Info {
        /// Directory to resolve (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Render the production warning banner, if one is due
    Warning {
        /// Directory to resolve (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Render the segment body and numeric color code, tab-separated
    ///
    /// For prompt frameworks that apply their own coloring from a
    /// 256-color palette index.
    Segment {
        /// Directory to resolve (defaults to the current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Show the effective prompt configuration
    Config,

    /// Strictly parse and check the directory mapping file
    ///
    /// The prompt itself never fails on a broken mapping file; this is
    /// where its problems become visible.
    Validate {
        /// Mapping file to check (defaults to the configured one)
        path: Option<PathBuf>,
    },

    /// Print the shell integration snippet
    ///
    /// Examples:
    ///   secenv hook zsh >> ~/.zshrc
    Hook {
        /// Shell to print the hook for (currently: zsh)
        shell: String,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   secenv completions zsh > ~/.zfunc/_secenv
    ///   secenv completions bash > ~/.local/share/bash-completion/completions/secenv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_invocation() {
        let cli = Cli::parse_from(["secenv"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_info_command() {
        let cli = Cli::parse_from(["secenv", "info"]);
        assert!(matches!(cli.command, Some(Commands::Info { dir: None })));
    }

    #[test]
    fn parse_info_with_dir() {
        let cli = Cli::parse_from(["secenv", "info", "--dir", "/srv/api"]);
        match cli.command {
            Some(Commands::Info { dir }) => {
                assert_eq!(dir, Some(PathBuf::from("/srv/api")));
            }
            _ => panic!("Expected Info command"),
        }
    }

    #[test]
    fn parse_validate_with_path() {
        let cli = Cli::parse_from(["secenv", "validate", "map.yaml"]);
        match cli.command {
            Some(Commands::Validate { path }) => {
                assert_eq!(path, Some(PathBuf::from("map.yaml")));
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn parse_hook_command() {
        let cli = Cli::parse_from(["secenv", "hook", "zsh"]);
        match cli.command {
            Some(Commands::Hook { shell }) => assert_eq!(shell, "zsh"),
            _ => panic!("Expected Hook command"),
        }
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["secenv", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["secenv", "info", "--verbose"]);
        assert!(cli.verbose);
    }
}
