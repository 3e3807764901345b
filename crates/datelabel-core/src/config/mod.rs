use std::collections::HashMap;

use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL, ENV_PREFIX};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub frequency: FrequencyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Frequency label settings.
///
/// `aliases` maps extra unit spellings onto canonical unit tokens, e.g.
/// `hrs = "hr"`. Built-in spellings always win over configured ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrequencyConfig {
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl FrequencyConfig {
    /// ## Summary
    /// Looks up a configured alias, ignoring ASCII case.
    #[must_use]
    pub fn resolve_alias(&self, token: &str) -> Option<&str> {
        let token = token.to_ascii_lowercase();
        self.aliases
            .iter()
            .find(|(alias, _)| alias.to_ascii_lowercase() == token)
            .map(|(_, canonical)| canonical.as_str())
    }
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder().set_default("logging.level", DEFAULT_LOG_LEVEL)?)
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `datelabel.toml` into `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(builder_with_defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds `Settings` from an in-memory TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match `Settings`.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(builder_with_defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
