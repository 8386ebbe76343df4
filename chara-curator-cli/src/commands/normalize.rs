use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use chara_curator_core::Simplifier;
use chara_curator_fetch::{Settings, read_json, write_json};

use crate::error::CliError;

/// Simplify a raw record saved on disk. Prints to stdout unless `output` is set.
pub(crate) fn run_normalize(
    settings: &Settings,
    input: PathBuf,
    output: Option<PathBuf>,
    no_project: bool,
) -> Result<(), CliError> {
    let raw = read_json(&input)?;
    let simplifier = Simplifier::new(settings.rules.clone())
        .project_skill_levels(settings.project_skill_levels && !no_project);
    let simplified = simplifier.simplify(&raw);

    match output {
        Some(path) => {
            write_json(&path, &simplified)?;
            log::info!(
                "{} {} -> {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                input.display(),
                path.display(),
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&simplified)?),
    }
    Ok(())
}
