//! Configuration for graphwalk
//!
//! Settings live in `graphwalk.toml` under the user config directory
//! (`~/.config/graphwalk/` on Linux). `GRAPHWALK_CONFIG_DIR` overrides the
//! directory and `--config` names a file directly. A missing default file
//! means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphwalkError, Result};
use crate::grid::{cell_count, MAX_CELLS};
use crate::bail_invalid;

pub use types::{Config, MazeConfig, OutputConfig};

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "graphwalk.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

impl Config {
    /// Location of the default config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphwalkError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating its directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| GraphwalkError::failed("create config directory", e))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphwalkError::failed("serialize config", e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load `explicit` if given, otherwise the default file when it exists
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GraphwalkError::not_found("config file", path.display()));
            }
            tracing::debug!(path = %path.display(), "config_explicit");
            return Self::load(path);
        }

        let path = Self::default_path()?;
        if path.exists() {
            tracing::debug!(path = %path.display(), "config_default");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.maze.validate()
    }
}

impl MazeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            bail_invalid!("maze rows", self.rows);
        }
        if self.columns == 0 {
            bail_invalid!("maze columns", self.columns);
        }
        if !cell_count(self.rows, self.columns).is_some_and(|cells| cells <= MAX_CELLS) {
            bail_invalid!(
                "maze size",
                format!(
                    "{}x{} (at most {} cells)",
                    self.rows, self.columns, MAX_CELLS
                )
            );
        }
        if !(0.0..=1.0).contains(&self.sparseness) {
            bail_invalid!("maze sparseness", self.sparseness);
        }
        Ok(())
    }
}
