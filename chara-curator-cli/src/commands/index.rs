use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use chara_curator_fetch::{GameDataClient, Settings, dump_index};

use crate::error::CliError;

/// Save the raw index payload to a single file.
pub(crate) fn run_index(settings: &Settings, output: Option<PathBuf>) -> Result<(), CliError> {
    let endpoints = settings.endpoints()?;
    let client = GameDataClient::new(&endpoints)?;
    let path = output.unwrap_or_else(|| settings.index_file.clone());

    log::info!(
        "Fetching index from {}",
        endpoints.index_url.if_supports_color(Stdout, |t| t.cyan()),
    );
    let count = dump_index(&client, &path)?;
    log::info!(
        "{} Wrote {} index entries to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        count,
        path.display(),
    );
    Ok(())
}
