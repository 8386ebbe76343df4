use std::path::{Path, PathBuf};

use chara_curator_core::{NamingPolicy, Rules};

use crate::error::FetchError;

pub const ENV_INDEX_URL: &str = "CHARA_INDEX_URL";
pub const ENV_DETAIL_URL: &str = "CHARA_DETAIL_URL";
pub const ENV_OUT_DIR: &str = "CHARA_OUT_DIR";

const DEFAULT_OUT_DIR: &str = "characters";
const DEFAULT_INDEX_FILE: &str = "characters.json";

/// The two upstream endpoints plus transport options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Returns the key => metadata index.
    pub index_url: String,
    /// Base URL of detail records; the character key is appended as a path segment.
    pub detail_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

/// Fully resolved settings for a run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub index_url: Option<String>,
    pub detail_url: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Directory receiving one JSON file per character.
    pub out_dir: PathBuf,
    /// File receiving the raw index payload.
    pub index_file: PathBuf,
    pub project_skill_levels: bool,
    pub skip_existing: bool,
    pub naming: NamingPolicy,
    pub rules: Rules,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default value.
    Default,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of the settings that can come from the environment.
#[derive(Debug)]
pub struct SettingSources {
    pub index_url: SettingSource,
    pub detail_url: SettingSource,
    pub out_dir: SettingSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    endpoints: Option<EndpointsConfig>,
    output: Option<OutputConfig>,
    pipeline: Option<PipelineConfig>,
    rules: Option<Rules>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct EndpointsConfig {
    index_url: Option<String>,
    detail_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct OutputConfig {
    dir: Option<PathBuf>,
    index_file: Option<PathBuf>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct PipelineConfig {
    project_skill_levels: Option<bool>,
    skip_existing: Option<bool>,
    naming: Option<NamingPolicy>,
}

impl Settings {
    /// Load settings from environment variables, the config file, and defaults.
    ///
    /// Priority: env vars > config file > defaults. `config` overrides the
    /// default config file location; an explicit path must exist, while a
    /// missing default file simply means "no file".
    pub fn load(config: Option<&Path>) -> Result<Self, FetchError> {
        let file = load_config_file(config)?;
        Ok(Self::resolve(file, |var| std::env::var(var).ok()))
    }

    fn resolve(file: ConfigFile, env: impl Fn(&str) -> Option<String>) -> Self {
        let endpoints = file.endpoints.unwrap_or_default();
        let output = file.output.unwrap_or_default();
        let pipeline = file.pipeline.unwrap_or_default();

        Self {
            index_url: env(ENV_INDEX_URL).or(endpoints.index_url),
            detail_url: env(ENV_DETAIL_URL).or(endpoints.detail_url),
            timeout_secs: endpoints.timeout_secs,
            out_dir: env(ENV_OUT_DIR)
                .map(PathBuf::from)
                .or(output.dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            index_file: output
                .index_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_FILE)),
            project_skill_levels: pipeline.project_skill_levels.unwrap_or(true),
            skip_existing: pipeline.skip_existing.unwrap_or(false),
            naming: pipeline.naming.unwrap_or_default(),
            rules: file.rules.unwrap_or_default(),
        }
    }

    /// Both endpoint URLs, or a config error naming what to set.
    pub fn endpoints(&self) -> Result<Endpoints, FetchError> {
        let index_url = self.index_url.clone().ok_or_else(|| {
            FetchError::config(format!(
                "Missing index URL. Set {ENV_INDEX_URL} or endpoints.index_url in the config file"
            ))
        })?;
        let detail_url = self.detail_url.clone().ok_or_else(|| {
            FetchError::config(format!(
                "Missing detail URL. Set {ENV_DETAIL_URL} or endpoints.detail_url in the config file"
            ))
        })?;
        Ok(Endpoints {
            index_url,
            detail_url,
            timeout_secs: self.timeout_secs,
        })
    }
}

/// Return the path of the default config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("chara-curator").join("config.toml"))
}

/// Write a config file populated with the current defaults, creating parent
/// directories as needed. Refuses to overwrite an existing file.
/// Returns the path the file was written to.
pub fn write_default_config(path: Option<&Path>) -> Result<PathBuf, FetchError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()
            .ok_or_else(|| FetchError::config("Could not determine config directory"))?,
    };
    if path.exists() {
        return Err(FetchError::config(format!(
            "{} already exists",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FetchError::io(parent, e))?;
    }

    let config = ConfigFile {
        endpoints: Some(EndpointsConfig::default()),
        output: Some(OutputConfig {
            dir: Some(PathBuf::from(DEFAULT_OUT_DIR)),
            index_file: Some(PathBuf::from(DEFAULT_INDEX_FILE)),
        }),
        pipeline: Some(PipelineConfig {
            project_skill_levels: Some(true),
            skip_existing: Some(false),
            naming: Some(NamingPolicy::default()),
        }),
        rules: Some(Rules::default()),
    };

    let toml_str = toml::to_string_pretty(&config)
        .map_err(|e| FetchError::config(format!("Failed to serialize config: {e}")))?;

    std::fs::write(&path, toml_str).map_err(|e| FetchError::io(&path, e))?;
    Ok(path)
}

/// Determine where each environment-overridable setting is coming from.
pub fn setting_sources(config: Option<&Path>) -> SettingSources {
    let file = load_config_file(config).unwrap_or_default();
    sources_from(&file, |var| std::env::var(var).is_ok())
}

fn sources_from(file: &ConfigFile, env_set: impl Fn(&str) -> bool) -> SettingSources {
    let endpoints = file.endpoints.as_ref();

    let index_url = if env_set(ENV_INDEX_URL) {
        SettingSource::EnvVar(ENV_INDEX_URL)
    } else if endpoints.and_then(|e| e.index_url.as_ref()).is_some() {
        SettingSource::ConfigFile
    } else {
        SettingSource::Missing
    };

    let detail_url = if env_set(ENV_DETAIL_URL) {
        SettingSource::EnvVar(ENV_DETAIL_URL)
    } else if endpoints.and_then(|e| e.detail_url.as_ref()).is_some() {
        SettingSource::ConfigFile
    } else {
        SettingSource::Missing
    };

    let out_dir = if env_set(ENV_OUT_DIR) {
        SettingSource::EnvVar(ENV_OUT_DIR)
    } else if file.output.as_ref().and_then(|o| o.dir.as_ref()).is_some() {
        SettingSource::ConfigFile
    } else {
        SettingSource::Default
    };

    SettingSources {
        index_url,
        detail_url,
        out_dir,
    }
}

fn load_config_file(explicit: Option<&Path>) -> Result<ConfigFile, FetchError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };

    let content = std::fs::read_to_string(&path).map_err(|e| FetchError::io(&path, e))?;
    toml::from_str(&content)
        .map_err(|e| FetchError::config(format!("Invalid config file {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::resolve(ConfigFile::default(), no_env);
        assert_eq!(settings.index_url, None);
        assert_eq!(settings.out_dir, PathBuf::from("characters"));
        assert_eq!(settings.index_file, PathBuf::from("characters.json"));
        assert!(settings.project_skill_levels);
        assert!(!settings.skip_existing);
        assert_eq!(settings.naming, NamingPolicy::Index);
        assert_eq!(settings.rules, Rules::default());
    }

    #[test]
    fn test_file_values() {
        let file: ConfigFile = toml::from_str(
            r#"
            [endpoints]
            index_url = "https://api.example.com/index"
            detail_url = "https://api.example.com/character"
            timeout_secs = 20

            [output]
            dir = "out/chars"

            [pipeline]
            skip_existing = true
            naming = "detail"

            [rules]
            milestone_levels = [10, 20]
            "#,
        )
        .unwrap();
        let settings = Settings::resolve(file, no_env);
        let endpoints = settings.endpoints().unwrap();
        assert_eq!(endpoints.index_url, "https://api.example.com/index");
        assert_eq!(endpoints.timeout_secs, Some(20));
        assert_eq!(settings.out_dir, PathBuf::from("out/chars"));
        assert!(settings.skip_existing);
        assert_eq!(settings.naming, NamingPolicy::Detail);
        assert_eq!(settings.rules.milestone_levels, vec![10, 20]);
        assert_eq!(settings.rules.growth_suffix, "Growth");
    }

    #[test]
    fn test_env_overrides_file() {
        let file: ConfigFile = toml::from_str(
            r#"
            [endpoints]
            index_url = "https://file.example.com/index"
            "#,
        )
        .unwrap();
        let env = |var: &str| match var {
            ENV_INDEX_URL => Some("https://env.example.com/index".to_string()),
            ENV_OUT_DIR => Some("/tmp/chars".to_string()),
            _ => None,
        };
        let settings = Settings::resolve(file, env);
        assert_eq!(
            settings.index_url.as_deref(),
            Some("https://env.example.com/index")
        );
        assert_eq!(settings.out_dir, PathBuf::from("/tmp/chars"));
    }

    #[test]
    fn test_missing_endpoint_is_config_error() {
        let settings = Settings::resolve(ConfigFile::default(), no_env);
        let err = settings.endpoints().unwrap_err();
        assert!(matches!(err, FetchError::Config(ref msg) if msg.contains(ENV_INDEX_URL)));
    }

    #[test]
    fn test_sources() {
        let file: ConfigFile = toml::from_str(
            r#"
            [endpoints]
            detail_url = "https://api.example.com/character"
            "#,
        )
        .unwrap();
        let sources = sources_from(&file, |var| var == ENV_INDEX_URL);
        assert_eq!(sources.index_url, SettingSource::EnvVar(ENV_INDEX_URL));
        assert_eq!(sources.detail_url, SettingSource::ConfigFile);
        assert_eq!(sources.out_dir, SettingSource::Default);
        assert_eq!(sources.index_url.to_string(), "env $CHARA_INDEX_URL");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Settings::load(Some(&missing)),
            Err(FetchError::Io { .. })
        ));
    }

    #[test]
    fn test_write_default_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let written = write_default_config(Some(&path)).unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let file: ConfigFile = toml::from_str(&content).unwrap();
        let settings = Settings::resolve(file, no_env);
        assert_eq!(settings.rules, Rules::default());
        assert_eq!(settings.naming, NamingPolicy::Index);

        assert!(matches!(
            write_default_config(Some(&path)),
            Err(FetchError::Config(_))
        ));
    }
}
