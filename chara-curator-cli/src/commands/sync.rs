use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use chara_curator_core::NamingPolicy;
use chara_curator_fetch::{GameDataClient, Settings, SyncEvent, SyncOptions, sync_characters};

use crate::error::CliError;
use crate::spinner::Spinner;

/// Command-line overrides for a sync run.
pub(crate) struct SyncArgs {
    pub out_dir: Option<PathBuf>,
    pub naming: Option<NamingPolicy>,
    pub skip_existing: bool,
    pub no_project: bool,
    pub limit: Option<usize>,
}

/// Fetch the index and every character, writing simplified records.
pub(crate) fn run_sync(settings: &Settings, args: SyncArgs, quiet: bool) -> Result<(), CliError> {
    let endpoints = settings.endpoints()?;
    let client = GameDataClient::new(&endpoints)?;

    let mut options = SyncOptions::from_settings(settings);
    if let Some(dir) = args.out_dir {
        options.out_dir = dir;
    }
    if let Some(naming) = args.naming {
        options.naming = naming;
    }
    options.skip_existing |= args.skip_existing;
    options.project_skill_levels &= !args.no_project;
    options.limit = args.limit;

    log::info!(
        "Syncing characters from {} into {}",
        endpoints.index_url.if_supports_color(Stdout, |t| t.cyan()),
        options.out_dir.display(),
    );
    log::debug!(
        "naming={}, skip_existing={}, project_skill_levels={}",
        options.naming,
        options.skip_existing,
        options.project_skill_levels,
    );

    let spinner = Spinner::new(quiet);
    spinner.set_message("Fetching index...".to_string());
    let mut total = 0;

    let result = sync_characters(&client, &options, |event| match event {
        SyncEvent::IndexLoaded { total: count } => {
            total = count;
            spinner.set_message(format!("{count} characters in index"));
        }
        SyncEvent::Fetching { index, key } => {
            spinner.set_message(format!("[{}/{}] Fetching {}", index + 1, total, key));
        }
        SyncEvent::Written { index, key, path } => {
            spinner.suspend(|| {
                log::info!(
                    "  {} [{}/{}] {} -> {}",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    index + 1,
                    total,
                    key,
                    path.display(),
                );
            });
        }
        SyncEvent::Skipped { index, key, path } => {
            spinner.suspend(|| {
                log::info!(
                    "  {} [{}/{}] {} ({} exists)",
                    "-".if_supports_color(Stdout, |t| t.dimmed()),
                    index + 1,
                    total,
                    key,
                    path.display(),
                );
            });
        }
    });
    spinner.finish();

    let summary = result?;
    log::info!("");
    log::info!(
        "{} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
