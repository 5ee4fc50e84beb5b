//! Processor configuration
//!
//! Defaults ship inside the crate as `configs/default.toml`. A user file only
//! needs the keys it overrides.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use imetext_core::Locale;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, Result};

const EMBEDDED_DEFAULT: &str = include_str!("../configs/default.toml");

static DEFAULT_CONFIG: OnceLock<Config> = OnceLock::new();

/// On-disk shape: every key optional
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    locale: Option<String>,
    word_separators: Option<String>,
}

fn load_embedded_default() -> Result<Config> {
    let file: ConfigFile = toml::from_str(EMBEDDED_DEFAULT)?;
    let config = Config {
        locale: file
            .locale
            .ok_or_else(|| ApiError::Config("embedded default has no locale".to_string()))?,
        word_separators: file.word_separators.ok_or_else(|| {
            ApiError::Config("embedded default has no word_separators".to_string())
        })?,
    };
    config.validate()?;
    Ok(config)
}

/// Settings for a [`TextProcessor`](crate::TextProcessor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    locale: String,
    word_separators: String,
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG
            .get_or_init(|| {
                load_embedded_default().expect("Failed to load embedded default config")
            })
            .clone()
    }
}

impl Config {
    /// Create a builder starting from the defaults
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse TOML, taking unspecified keys from the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Self::default();
        if let Some(locale) = file.locale {
            config.locale = locale;
        }
        if let Some(word_separators) = file.word_separators {
            config.word_separators = word_separators;
        }
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Locale tag used for case mapping
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Characters that end a word for per-word capitalization
    pub fn word_separators(&self) -> &str {
        &self.word_separators
    }

    /// The parsed locale
    pub fn parsed_locale(&self) -> Result<Locale> {
        Locale::parse(&self.locale).map_err(|_| ApiError::InvalidLocale {
            tag: self.locale.clone(),
        })
    }

    fn validate(&self) -> Result<()> {
        self.parsed_locale().map(|_| ())
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the locale tag
    pub fn locale(mut self, tag: impl Into<String>) -> Self {
        self.config.locale = tag.into();
        self
    }

    /// Set the word separator characters
    pub fn word_separators(mut self, separators: impl Into<String>) -> Self {
        self.config.word_separators = separators.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
