//! Global evman configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EvmanError, EvmanResult};

static DEFAULT_DATA_DIR: &str = "~/.evman";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/evman/config.toml
///
/// Everything the application persists (the event store and the session
/// file) lives under `data_dir`.
#[derive(Serialize, Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            data_dir: default_data_dir(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> EvmanResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EvmanError::Config("Could not determine config directory".into()))?
            .join("evman");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/evman/config.toml
    pub fn save(&self) -> EvmanResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| EvmanError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| EvmanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EvmanResult<()> {
        let contents = format!(
            "\
# evman configuration

# Where your events and session live:
# data_dir = \"{}\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| EvmanError::Config(format!("Could not create config directory: {e}")))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EvmanError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_default_data_dir() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("~/.evman"));
    }

    #[test]
    fn explicit_data_dir_wins() {
        let config: GlobalConfig = toml::from_str("data_dir = \"/tmp/events\"").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/events"));
    }

    #[test]
    fn default_config_template_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        GlobalConfig::create_default_config(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let config: GlobalConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.data_dir, default_data_dir());
    }
}
