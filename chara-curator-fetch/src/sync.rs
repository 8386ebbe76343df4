//! The batch pipeline: index, then fetch, simplify, and write each character in turn.

use std::path::{Path, PathBuf};

use chara_curator_core::{NamingPolicy, Rules, Simplifier, output_name};
use serde_json::Value;

use crate::client::CharacterSource;
use crate::config::Settings;
use crate::error::FetchError;
use crate::output::{character_path, write_json};

/// Options for a sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Directory receiving one JSON file per character
    pub out_dir: PathBuf,
    /// Whether output names come from the index entry or the detail record
    pub naming: NamingPolicy,
    /// Leave characters whose output file already exists untouched
    pub skip_existing: bool,
    /// Replace skill param base/growth values with per-level tables
    pub project_skill_levels: bool,
    /// Maximum number of characters to process, in index order
    pub limit: Option<usize>,
    pub rules: Rules,
}

impl SyncOptions {
    /// Create default options writing into `out_dir`.
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            out_dir,
            naming: NamingPolicy::Index,
            skip_existing: false,
            project_skill_levels: true,
            limit: None,
            rules: Rules::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            out_dir: settings.out_dir.clone(),
            naming: settings.naming,
            skip_existing: settings.skip_existing,
            project_skill_levels: settings.project_skill_levels,
            limit: None,
            rules: settings.rules.clone(),
        }
    }
}

/// Progress events emitted during a sync, consumed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// The index was fetched; `total` characters will be processed.
    IndexLoaded { total: usize },
    /// Requesting the detail record of a character.
    Fetching { index: usize, key: String },
    /// A simplified record was written.
    Written {
        index: usize,
        key: String,
        path: PathBuf,
    },
    /// The output file already existed and was left alone.
    Skipped {
        index: usize,
        key: String,
        path: PathBuf,
    },
}

/// Counts reported at the end of a sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub fetched: usize,
    pub skipped: usize,
}

impl std::fmt::Display for SyncSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fetched {} new character{}, skipped {}",
            self.fetched,
            if self.fetched == 1 { "" } else { "s" },
            self.skipped
        )
    }
}

enum Outcome {
    Written,
    Skipped,
}

/// Fetch the index and write one simplified file per character.
///
/// Characters are processed one at a time in index order. The first error
/// aborts the whole run and is returned with the offending key attached.
pub fn sync_characters<S>(
    source: &S,
    options: &SyncOptions,
    mut on_event: impl FnMut(SyncEvent),
) -> Result<SyncSummary, FetchError>
where
    S: CharacterSource + ?Sized,
{
    let index = source.fetch_index()?;
    let total = options.limit.map_or(index.len(), |limit| limit.min(index.len()));
    log::debug!("Index lists {} characters, processing {total}", index.len());
    on_event(SyncEvent::IndexLoaded { total });

    let simplifier = Simplifier::new(options.rules.clone())
        .project_skill_levels(options.project_skill_levels);

    let mut summary = SyncSummary::default();
    for (i, (key, entry)) in index.iter().take(total).enumerate() {
        let outcome = sync_one(source, options, &simplifier, i, key, entry, &mut on_event)
            .map_err(|e| e.for_character(key))?;
        match outcome {
            Outcome::Written => summary.fetched += 1,
            Outcome::Skipped => summary.skipped += 1,
        }
    }

    Ok(summary)
}

fn sync_one<S>(
    source: &S,
    options: &SyncOptions,
    simplifier: &Simplifier,
    index: usize,
    key: &str,
    entry: &Value,
    on_event: &mut impl FnMut(SyncEvent),
) -> Result<Outcome, FetchError>
where
    S: CharacterSource + ?Sized,
{
    // Index naming knows the path before fetching, so skipping saves a request.
    let planned = match options.naming {
        NamingPolicy::Index => Some(character_path(
            &options.out_dir,
            &output_name(Some(entry), key),
        )),
        NamingPolicy::Detail => None,
    };
    if let Some(path) = &planned {
        if skip(options, path) {
            on_event(skipped(index, key, path));
            return Ok(Outcome::Skipped);
        }
    }

    on_event(SyncEvent::Fetching {
        index,
        key: key.to_string(),
    });
    let raw = source.fetch_detail(key)?;

    let path = match planned {
        Some(path) => path,
        None => {
            let path = character_path(&options.out_dir, &output_name(Some(&raw), key));
            if skip(options, &path) {
                on_event(skipped(index, key, &path));
                return Ok(Outcome::Skipped);
            }
            path
        }
    };

    write_json(&path, &simplifier.simplify(&raw))?;
    on_event(SyncEvent::Written {
        index,
        key: key.to_string(),
        path,
    });
    Ok(Outcome::Written)
}

fn skip(options: &SyncOptions, path: &Path) -> bool {
    options.skip_existing && path.exists()
}

fn skipped(index: usize, key: &str, path: &Path) -> SyncEvent {
    SyncEvent::Skipped {
        index,
        key: key.to_string(),
        path: path.to_path_buf(),
    }
}

/// Write the unmodified index payload to `path`. Returns the number of entries.
pub fn dump_index<S>(source: &S, path: &Path) -> Result<usize, FetchError>
where
    S: CharacterSource + ?Sized,
{
    let index = source.fetch_index()?;
    write_json(path, &index)?;
    Ok(index.len())
}
