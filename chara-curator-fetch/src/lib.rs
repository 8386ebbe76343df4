pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod sync;

pub use client::{CharacterSource, GameDataClient};
pub use config::{
    Endpoints, SettingSource, SettingSources, Settings, config_path, setting_sources,
    write_default_config,
};
pub use error::FetchError;
pub use output::{character_path, read_json, write_json};
pub use sync::{SyncEvent, SyncOptions, SyncSummary, dump_index, sync_characters};
