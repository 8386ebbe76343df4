//! chara-curator CLI
//!
//! Fetches character data from the game-data API and writes one simplified
//! JSON file per character.

mod cli_types;
mod commands;
mod error;
mod logger;
mod spinner;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use chara_curator_fetch::Settings;

use crate::cli_types::{Cli, Commands, ConfigAction};
use crate::commands::sync::SyncArgs;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e
        );
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Sync {
            out_dir,
            naming,
            skip_existing,
            no_project,
            limit,
        } => {
            let settings = Settings::load(config)?;
            let args = SyncArgs {
                out_dir,
                naming,
                skip_existing,
                no_project,
                limit,
            };
            commands::sync::run_sync(&settings, args, cli.quiet)
        }
        Commands::Index { output } => {
            let settings = Settings::load(config)?;
            commands::index::run_index(&settings, output)
        }
        Commands::Normalize {
            input,
            output,
            no_project,
        } => {
            let settings = Settings::load(config)?;
            commands::normalize::run_normalize(&settings, input, output, no_project)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(config),
            ConfigAction::Init => commands::config::run_config_init(config),
            ConfigAction::Path => {
                commands::config::run_config_path(config);
                Ok(())
            }
        },
    }
}
