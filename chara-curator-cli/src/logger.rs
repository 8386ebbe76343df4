//! Console logging setup.
//!
//! All user-facing output goes through the `log` macros. Normal runs print
//! bare messages; `--verbose` adds timestamps and level tags.

use std::io::Write;

use log::{Level, LevelFilter};

const OWN_CRATES: &[&str] = &[
    "chara_curator_cli",
    "chara_curator_fetch",
    "chara_curator_core",
];

/// Install the global logger. `RUST_LOG` still overrides the chosen levels.
pub(crate) fn init(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    for module in OWN_CRATES {
        builder.filter_module(module, level);
    }

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(buf, "error: {}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.parse_default_env();
    if builder.try_init().is_err() {
        eprintln!("warning: logger already initialized");
    }
}
