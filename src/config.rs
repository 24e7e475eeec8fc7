//! Configuration module for the extractor.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `EEXTRACT_` and use double
//! underscores to separate nested levels:
//! - `EEXTRACT_FILTER__SERVER_MARKER=Handler` sets `filter.server_marker`
//! - `EEXTRACT_RENDER__JSON_TAGS=true` sets `render.json_tags`
//! - `EEXTRACT_DEBUG=true` sets `debug`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, ExtractResult};
use crate::extract::ServiceFilter;
use crate::render::RenderOptions;

/// Directory holding the settings file, searched for from the current directory upwards
pub const CONFIG_DIR: &str = ".eextract";
const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "EEXTRACT_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Service naming filter
    #[serde(default)]
    pub filter: ServiceFilter,

    /// Text rendering options
    #[serde(default)]
    pub render: RenderOptions,

    /// Section labels on stdout
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Label of the entity section
    #[serde(default = "default_entities_label")]
    pub entities_label: String,

    /// Label of the service section
    #[serde(default = "default_services_label")]
    pub services_label: String,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_entities_label() -> String {
    "Structs".to_string()
}
fn default_services_label() -> String {
    "Interfaces".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            filter: ServiceFilter::default(),
            render: RenderOptions::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            entities_label: default_entities_label(),
            services_label: default_services_label(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; defaults and environment still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".")
                    .into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find the settings file by looking for a `.eextract` directory
    /// Searches from current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Serialize the settings as pretty TOML
    pub fn to_toml(&self) -> ExtractResult<String> {
        toml::to_string_pretty(self).map_err(|e| ExtractError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> ExtractResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ExtractError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, self.to_toml()?).map_err(|source| ExtractError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the default settings to `.eextract/settings.toml` in the current directory
    pub fn init_config_file(force: bool) -> ExtractResult<PathBuf> {
        let config_path = PathBuf::from(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(ExtractError::ConfigError {
                reason: format!(
                    "Configuration file already exists at {}. Use --force to overwrite",
                    config_path.display()
                ),
            });
        }

        Settings::default().save(&config_path)?;
        Ok(config_path)
    }
}
