//! Configuration structures and loading.

use config::{Config, Environment, File, FileFormat};
use pathshala_error::{ConfigError, ConfigErrorKind, PathshalaError, PathshalaResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../pathshala.toml");

/// Generation service settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct ModelConfig {
    /// Model identifier
    name: String,
    /// Environment variable holding the API key
    api_key_env: String,
    /// REST endpoint prefix; the model name and method are appended
    base_url: String,
    /// Sampling temperature
    temperature: f32,
    /// Output token ceiling per call
    max_output_tokens: u32,
    /// Most tool rounds one generation call may take
    max_tool_rounds: usize,
    /// HTTP deadline in seconds, 0 for none
    timeout_secs: u64,
}

/// Which web-search capability to inject into the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Canned text built from the query, no network
    Placeholder,
    /// Google Programmable Search JSON API
    CustomSearch,
    /// Offer no tool at all
    Disabled,
}

/// Web-search capability settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct SearchConfig {
    /// Which implementation to use
    mode: SearchMode,
    /// Environment variable holding the search API key
    api_key_env: String,
    /// Search endpoint
    base_url: String,
    /// Programmable search engine id (`cx`)
    #[serde(default)]
    engine_id: Option<String>,
    /// Results to fold into one answer
    max_results: u32,
}

/// Saved lesson storage settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct StorageConfig {
    /// Directory holding the collection file; platform data dir when unset
    #[serde(default)]
    data_dir: Option<PathBuf>,
    /// Collection name, also the file stem
    collection: String,
}

impl StorageConfig {
    /// Directory the collection lives in.
    ///
    /// Falls back to `<data dir>/pathshala`, then `./.pathshala` on platforms
    /// without a data directory.
    pub fn resolved_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join("pathshala"))
                .unwrap_or_else(|| PathBuf::from(".pathshala")),
        }
    }
}

/// Top-level Pathshala configuration.
///
/// # Example
///
/// ```no_run
/// use pathshala_config::PathshalaConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PathshalaConfig::load()?;
/// println!("model: {}", config.model().name());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, derive_getters::Getters)]
pub struct PathshalaConfig {
    /// Generation service settings
    model: ModelConfig,
    /// Web-search settings
    search: SearchConfig,
    /// Saved lesson storage settings
    storage: StorageConfig,
}

impl PathshalaConfig {
    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled file is malformed.
    pub fn defaults() -> PathshalaResult<Self> {
        Self::finish(
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)),
        )
    }

    /// Bundled defaults overlaid with one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> PathshalaResult<Self> {
        debug!("Loading configuration from file");

        Self::finish(
            Config::builder()
                .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
                .add_source(File::from(path.as_ref())),
        )
    }

    /// Load configuration with precedence: env > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file is malformed or a value is invalid.
    #[instrument]
    pub fn load() -> PathshalaResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let home_config = config_dir.join("pathshala/pathshala.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("pathshala").required(false))
            .add_source(Environment::with_prefix("PATHSHALA").separator("__"));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> PathshalaResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                PathshalaError::from(ConfigError::new(ConfigErrorKind::Load(format!(
                    "merging layers: {}",
                    e
                ))))
            })?
            .try_deserialize()
            .map_err(|e| {
                PathshalaError::from(ConfigError::new(ConfigErrorKind::Load(format!(
                    "decoding settings: {}",
                    e
                ))))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no pipeline can run with.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first bad key.
    pub fn validate(&self) -> PathshalaResult<()> {
        if self.model.name.trim().is_empty() {
            return Err(ConfigError::invalid("model.name", "must not be empty").into());
        }
        if !(0.0..=2.0).contains(&self.model.temperature) {
            return Err(ConfigError::invalid(
                "model.temperature",
                format!("must be within 0.0..=2.0, got {}", self.model.temperature),
            )
            .into());
        }
        if self.model.max_output_tokens == 0 {
            return Err(ConfigError::invalid("model.max_output_tokens", "must be positive").into());
        }
        if self.search.mode == SearchMode::CustomSearch && self.search.engine_id.is_none() {
            return Err(ConfigError::invalid(
                "search.engine_id",
                "is required when mode = custom_search",
            )
            .into());
        }
        if self.storage.collection.trim().is_empty() {
            return Err(ConfigError::invalid("storage.collection", "must not be empty").into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathshala_error::PathshalaErrorKind;

    #[test]
    fn bundled_defaults_parse() {
        let config = PathshalaConfig::defaults().unwrap();
        assert_eq!(config.model().name(), "gemini-2.0-flash");
        assert_eq!(*config.model().max_tool_rounds(), 4);
        assert_eq!(*config.search().mode(), SearchMode::Placeholder);
        assert_eq!(config.storage().collection(), "savedLessons");
    }

    #[test]
    fn explicit_data_dir_wins() {
        let storage = StorageConfig {
            data_dir: Some(PathBuf::from("/tmp/lessons")),
            collection: "savedLessons".to_string(),
        };
        assert_eq!(storage.resolved_data_dir(), PathBuf::from("/tmp/lessons"));
    }

    #[test]
    fn validation_names_the_bad_key() {
        let mut config = PathshalaConfig::defaults().unwrap();
        config.model.temperature = 3.5;
        let err = config.validate().unwrap_err();
        match err.kind() {
            PathshalaErrorKind::Config(e) => assert_eq!(e.key(), Some("model.temperature")),
            other => panic!("expected a config error, got {}", other),
        }
    }
}
