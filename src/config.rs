//! CLI resource configuration.
//!
//! The library proper takes explicit paths everywhere (providers and
//! repositories are constructed with the directories they read). The CLI
//! needs somewhere to get those paths from; that's all `faux-cms.toml` is:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [resources]
//! templates_dir = "resources/blog-templates"  # Six blog template documents
//! data_dir = "resources/data"                 # categories/ and products/
//!
//! [defaults]
//! locale = "en_US"                            # en_US or de_DE
//! ```
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use crate::types::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "faux-cms.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CmsConfig {
    pub resources: ResourcesConfig,
    pub defaults: DefaultsConfig,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            resources: ResourcesConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Directory holding the six blog template documents.
    pub templates_dir: String,
    /// Directory holding `categories/` and `products/`.
    pub data_dir: String,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            templates_dir: "resources/blog-templates".to_string(),
            data_dir: "resources/data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Locale used when the CLI isn't given `--locale`.
    pub locale: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            locale: "en_US".to_string(),
        }
    }
}

impl CmsConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resources.templates_dir.is_empty() {
            return Err(ConfigError::Validation(
                "resources.templates_dir must not be empty".into(),
            ));
        }
        if self.resources.data_dir.is_empty() {
            return Err(ConfigError::Validation(
                "resources.data_dir must not be empty".into(),
            ));
        }
        self.default_locale()?;
        Ok(())
    }

    /// The configured default locale, parsed.
    pub fn default_locale(&self) -> Result<Locale, ConfigError> {
        self.defaults
            .locale
            .parse()
            .map_err(ConfigError::Validation)
    }
}

/// Load config from an explicit file, or from `faux-cms.toml` in `dir` if
/// present, or fall back to stock defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<CmsConfig, ConfigError> {
    let config: CmsConfig = match explicit {
        Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
        None => {
            let default_path = dir.join(CONFIG_FILENAME);
            if default_path.exists() {
                toml::from_str(&std::fs::read_to_string(default_path)?)?
            } else {
                CmsConfig::default()
            }
        }
    };
    config.validate()?;
    Ok(config)
}

/// A documented stock config, printed by `faux-cms gen-config`.
pub fn stock_toml() -> String {
    format!(
        "\
# faux-cms configuration
# All options are optional - defaults shown below

[resources]
templates_dir = \"{templates}\"  # Six blog template documents
data_dir = \"{data}\"            # categories/ and products/

[defaults]
locale = \"{locale}\"            # en_US or de_DE
",
        templates = ResourcesConfig::default().templates_dir,
        data = ResourcesConfig::default().data_dir,
        locale = DefaultsConfig::default().locale,
    )
}
