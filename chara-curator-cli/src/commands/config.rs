use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use chara_curator_fetch::{
    SettingSource, Settings, config_path, setting_sources, write_default_config,
};

use crate::error::CliError;

/// Show current settings and where they come from.
pub(crate) fn run_config_show(config: Option<&Path>) -> Result<(), CliError> {
    let settings = Settings::load(config)?;
    let sources = setting_sources(config);
    let path = config.map(Path::to_path_buf).or_else(config_path);

    log::info!(
        "{}",
        "chara-curator Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    let out_dir = settings.out_dir.display().to_string();
    let fields: [(&str, &SettingSource, Option<&str>); 3] = [
        ("index_url", &sources.index_url, settings.index_url.as_deref()),
        ("detail_url", &sources.detail_url, settings.detail_url.as_deref()),
        ("out_dir", &sources.out_dir, Some(out_dir.as_str())),
    ];
    for (name, source, value) in fields {
        match value {
            Some(v) => log::info!(
                "  {:<12} {} {}",
                name,
                v,
                format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "  {:<12} {}",
                name,
                "not set".if_supports_color(Stdout, |t| t.red()),
            ),
        }
    }

    log::info!("");
    log::info!("  naming:               {}", settings.naming);
    log::info!("  skip_existing:        {}", settings.skip_existing);
    log::info!("  project_skill_levels: {}", settings.project_skill_levels);
    log::info!("  milestone_levels:     {:?}", settings.rules.milestone_levels);
    log::info!("  growth_suffix:        {}", settings.rules.growth_suffix);
    log::info!("  percent markers:      {:?}", settings.rules.percent_name_markers);
    log::info!("  percent marker match: {:?}", settings.rules.percent_name_match);
    Ok(())
}

/// Write a default config file.
pub(crate) fn run_config_init(config: Option<&Path>) -> Result<(), CliError> {
    let path = write_default_config(config)?;
    log::info!(
        "{} Wrote default config to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    log::info!("Set endpoints.index_url and endpoints.detail_url before running sync.");
    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path(config: Option<&Path>) {
    match config.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => println!("{}", p.display()),
        None => log::warn!("Could not determine config directory"),
    }
}
