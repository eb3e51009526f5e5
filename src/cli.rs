//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for findplace using the `clap` crate.
//!
//! # Commands
//!
//! - **find**: Interactively locate your place in a directory (alias `f`)
//! - **list**: Show a directory's segments in playback order (alias `ls`)
//! - **config**: Show the configuration or its location
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use findplace::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["findplace", "-q", "list", "/books/dune"]);
//! assert!(cli.quiet);
//! assert!(matches!(cli.command, Commands::List { .. }));
//! ```

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Find where you left off in a long audiobook or podcast
#[derive(Parser, Debug)]
#[command(name = "findplace", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Use this configuration file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find your place by answering questions about short probes
    #[command(visible_alias = "f")]
    Find {
        /// Directory holding the recording's segments
        dir: PathBuf,

        /// Log deletions instead of performing them
        #[arg(long)]
        dry_run: bool,

        /// Open each probe in the default audio player
        #[arg(long)]
        play: bool,

        /// Segments shown around the probe
        #[arg(short, long, value_name = "N")]
        context: Option<usize>,
    },

    /// List segments in the order the device plays them
    #[command(visible_alias = "ls")]
    List {
        /// Directory to list
        dir: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the active configuration
    Show,
    /// Print the configuration file path
    Path,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_find_with_options() {
        let cli = Cli::parse_from([
            "findplace", "-vv", "find", "/books/dune", "--dry-run", "--play", "-c", "3",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Find {
                dir,
                dry_run,
                play,
                context,
            } => {
                assert_eq!(dir, PathBuf::from("/books/dune"));
                assert!(dry_run);
                assert!(play);
                assert_eq!(context, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::parse_from(["findplace", "f", "/x"]);
        assert!(matches!(cli.command, Commands::Find { .. }));

        let cli = Cli::parse_from(["findplace", "ls", "/x", "--json"]);
        assert!(matches!(cli.command, Commands::List { json: true, .. }));
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["findplace", "config", "path", "--config", "/tmp/c.toml"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Path
            }
        ));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_find_requires_directory() {
        assert!(Cli::try_parse_from(["findplace", "find"]).is_err());
    }
}
