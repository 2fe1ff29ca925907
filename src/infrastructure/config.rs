//! Configuration file loading

use crate::domain::Config;
use crate::error::{HashtagError, Result};
use log::debug;
use std::fs;
use std::path::Path;

impl Config {
    /// Parse and validate a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HashtagError::ConfigNotFound(path.to_path_buf())
            } else {
                HashtagError::Io(e)
            }
        })?;

        let config = Self::from_toml_str(&contents).map_err(|e| match e {
            HashtagError::TomlDeserialize(e) => HashtagError::Config(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            )),
            other => other,
        })?;

        debug!("loaded tag config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Save config to a TOML file, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }
}
