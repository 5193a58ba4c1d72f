#![forbid(unsafe_code)]

//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Read and edit WeType text-expansion hotwords
#[derive(Debug, Parser)]
#[command(name = "hotwordctl", version, about)]
pub struct Cli {
    /// Path to the MMKV store file (defaults to the per-user WeType path)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Skip restarting the input method after a write
    #[arg(long, global = true)]
    pub no_restart: bool,

    /// When to colorize output
    #[arg(long, global = true, value_enum, default_value_t = ColorOption::Auto)]
    pub color: ColorOption,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all hotwords
    List,
    /// Search hotwords by substring of trigger or expansion
    Search {
        /// Case-insensitive search term
        term: String,
    },
    /// Add a hotword (replaces an existing entry with the same trigger)
    Add {
        /// Trigger string typed by the user
        trigger: String,
        /// Expansion text inserted in its place
        expansion: String,
    },
    /// Delete hotwords by trigger
    Delete {
        /// Trigger of the entry to remove
        trigger: String,
    },
    /// Export the hotword list to a JSON file
    Export {
        /// Destination file
        path: PathBuf,
    },
    /// Import a hotword list from a JSON file, replacing the current list
    Import {
        /// Source file: an export document or a bare JSON array
        path: PathBuf,
    },
    /// Print the hotword list as JSON
    Json,
    /// List every key in the store file
    Keys,
    /// Print the live string value for an arbitrary store key
    Get {
        /// Store key to look up
        key: String,
    },
}

/// Color behavior for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorOption {
    /// Color only when stdout is a terminal
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl ColorOption {
    /// Map to a termcolor choice, checking the terminal for `Auto`
    pub fn to_color_choice(self) -> termcolor::ColorChoice {
        match self {
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
            ColorOption::Auto => {
                if std::io::stdout().is_terminal() {
                    termcolor::ColorChoice::Auto
                } else {
                    termcolor::ColorChoice::Never
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["hotwordctl", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List));
        assert!(cli.file.is_none());
        assert!(!cli.no_restart);
        assert_eq!(cli.color, ColorOption::Auto);
    }

    #[test]
    fn test_parse_add_with_globals_after_subcommand() {
        let cli = Cli::try_parse_from([
            "hotwordctl",
            "add",
            "sig",
            "Best regards",
            "--file",
            "/tmp/store",
            "--no-restart",
        ])
        .unwrap();
        match cli.command {
            Command::Add { trigger, expansion } => {
                assert_eq!(trigger, "sig");
                assert_eq!(expansion, "Best regards");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/store")));
        assert!(cli.no_restart);
    }

    #[test]
    fn test_parse_color_choice() {
        let cli = Cli::try_parse_from(["hotwordctl", "--color", "never", "json"]).unwrap();
        assert_eq!(cli.color, ColorOption::Never);
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["hotwordctl"]).is_err());
    }

    #[test]
    fn test_parse_search_requires_term() {
        assert!(Cli::try_parse_from(["hotwordctl", "search"]).is_err());
    }
}
