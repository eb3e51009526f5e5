//! findplace CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Find where you left off, answering yes/no about short probes
//! findplace find ~/Audiobooks/dune
//!
//! # Same, opening each probe in the default player and only logging deletions
//! findplace find ~/Audiobooks/dune --play --dry-run
//!
//! # Show the order the device will play the files in
//! findplace list ~/Audiobooks/dune
//! findplace ls ~/Audiobooks/dune --json
//!
//! # Configuration
//! findplace config show
//! findplace config path
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/findplace/config.toml` on Linux) and created with defaults on
//! first run.

use findplace::{
    FindPlaceError,
    cli::{Cli, Commands, ConfigCommands},
    commands,
    config::FindPlaceConfig,
    logging,
    ui::{OutputWriter, StdoutWriter},
};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, FindPlaceError>;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            StdoutWriter::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => FindPlaceConfig::load_from(path)?,
        None => FindPlaceConfig::load()?,
    };
    let quiet = cli.quiet || config.quiet;

    match cli.command {
        Commands::Find {
            dir,
            dry_run,
            play,
            context,
        } => {
            config.dry_run |= dry_run;
            config.open_probes |= play;
            if let Some(context) = context {
                config.context = context;
            }
            commands::find(&dir, &config, quiet)
        }
        Commands::List { dir, json } => commands::list(&dir, &config, json, quiet),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::show(&config),
            ConfigCommands::Path => commands::config::path(cli.config.as_deref()),
        },
    }
}
