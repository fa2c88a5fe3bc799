//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/coursecat/coursecat.toml`
//! 3. Environment variables: `COURSECAT_*` prefix

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};
use crate::util::path::expand_user_path;

const CONFIG_FILE: &str = "coursecat.toml";

const TEMPLATE: &str = r#"# coursecat configuration
#
# Catalog source used when a command does not name one.
# default_source = "~/courses/catalog.csv"
"#;

/// Catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Catalog source used when a command does not name one
    pub default_source: Option<String>,
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// `global_dir` overrides the platform config directory (used by
    /// tests); `None` resolves it via [`ProjectDirs`].
    pub fn load(global_dir: Option<&Path>) -> ApplicationResult<Self> {
        let global_path = match global_dir {
            Some(dir) => dir.join(CONFIG_FILE),
            None => Self::global_config_path(),
        };

        let mut builder = Config::builder();
        if global_path.exists() {
            builder = builder.add_source(File::from(global_path));
        }
        builder = builder.add_source(Environment::with_prefix("COURSECAT"));

        builder
            .build()
            .and_then(|merged| merged.try_deserialize())
            .map_err(|e| ApplicationError::Config {
                message: e.to_string(),
            })
    }

    /// Platform path of the global config file.
    pub fn global_config_path() -> PathBuf {
        ProjectDirs::from("", "", "coursecat")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Configured default source with `~` and env vars expanded.
    pub fn resolved_source(&self) -> Option<PathBuf> {
        self.default_source.as_deref().map(expand_user_path)
    }

    /// Serialize the merged settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }

    /// Write a commented template to the global config path and
    /// return that path. Refuses to overwrite an existing file.
    pub fn write_template() -> ApplicationResult<PathBuf> {
        let path = Self::global_config_path();
        if path.exists() {
            return Err(ApplicationError::Config {
                message: format!("config already exists: {}", path.display()),
            });
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, TEMPLATE)?;
        Ok(path)
    }
}
