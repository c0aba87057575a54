//! Console configuration: loading and defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::internal::dispatch::DEFAULT_MAX_DEPTH;

pub const CONFIG_DIR: &str = ".dbgcmd";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for one console session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Prompt shown before each interactive read.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Re-run the last command when an empty line is entered.
    #[serde(default = "default_repeat_on_empty")]
    pub repeat_on_empty: bool,
    /// Maximum command-table nesting the dispatcher will follow.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Default log filter, overridden by `DBGCMD_LOG` and `-v`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Commands replayed at start-up. They never become the "last command".
    #[serde(default)]
    pub init: Vec<String>,
}

fn default_prompt() -> String {
    "dbg> ".to_string()
}

fn default_repeat_on_empty() -> bool {
    true
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            repeat_on_empty: default_repeat_on_empty(),
            max_depth: default_max_depth(),
            log_level: default_log_level(),
            init: Vec::new(),
        }
    }
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Read and validate a config file. The file must exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ConsoleConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}

/// Load configuration from the two-tier hierarchy.
///
/// 1. `{working_dir}/.dbgcmd/config.toml` (project-local)
/// 2. `~/.config/dbgcmd/config.toml` (user-global)
///
/// The first file that exists wins. A broken file is skipped with a warning.
pub fn load_config(working_dir: &Path) -> ConsoleConfig {
    let project = working_dir.join(CONFIG_DIR).join(CONFIG_FILE);
    let user = dirs::config_dir().map(|dir| dir.join("dbgcmd").join(CONFIG_FILE));

    for path in std::iter::once(project).chain(user) {
        if !path.is_file() {
            continue;
        }
        match ConsoleConfig::from_file(&path) {
            Ok(config) => {
                tracing::debug!("loaded config from {}", path.display());
                return config;
            }
            Err(e) => tracing::warn!("{e}"),
        }
    }

    ConsoleConfig::default()
}
