//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chara_curator_core::NamingPolicy;

#[derive(Parser)]
#[command(name = "chara-curator")]
#[command(about = "Fetch character data and curate it into simplified JSON files", long_about = None)]
pub(crate) struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fetch every character in the index and write one simplified file each
    Sync {
        /// Output directory (default: config output.dir, then "characters")
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Take output names from the index entry or the detail record (index, detail)
        #[arg(long)]
        naming: Option<NamingPolicy>,

        /// Skip characters whose output file already exists
        #[arg(long)]
        skip_existing: bool,

        /// Keep raw skill param values instead of per-level tables
        #[arg(long)]
        no_project: bool,

        /// Maximum number of characters to process
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Save the raw character index as a single JSON file
    Index {
        /// Output file (default: config output.index_file, then "characters.json")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Simplify a saved raw character record without touching the network
    Normalize {
        /// Raw character JSON file
        input: PathBuf,

        /// Write the result here instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep raw skill param values instead of per-level tables
        #[arg(long)]
        no_project: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and their sources
    Show,

    /// Write a config file populated with the defaults
    Init,

    /// Print the config file path
    Path,
}
