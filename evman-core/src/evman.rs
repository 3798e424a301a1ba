//! Evman data directory management.

use std::path::PathBuf;

use config::{Config, File};

use crate::auth::SessionStore;
use crate::config::GlobalConfig;
use crate::error::{EvmanError, EvmanResult};
use crate::store::EventStore;

/// Handle on the loaded configuration and the paths derived from it.
#[derive(Clone)]
pub struct Evman {
    config: GlobalConfig,
}

impl Evman {
    pub fn load() -> EvmanResult<Self> {
        let config_path = GlobalConfig::config_path()?;

        if !config_path.exists() {
            GlobalConfig::create_default_config(&config_path)?;
        }

        let config: GlobalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| EvmanError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EvmanError::Config(e.to_string()))?;

        Ok(Evman { config })
    }

    /// Build a handle over an explicit data directory, bypassing the
    /// global config file.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Evman {
            config: GlobalConfig { data_dir },
        }
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data directory in display-friendly form,
    /// keeping `~` instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_dir.clone()
    }

    pub fn events_path(&self) -> PathBuf {
        self.data_path().join("events.json")
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_path().join("session.json")
    }

    pub fn event_store(&self) -> EventStore {
        EventStore::new(self.events_path())
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(self.session_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_derive_from_data_dir() {
        let evman = Evman::with_data_dir(PathBuf::from("/tmp/evman-test"));
        assert_eq!(evman.events_path(), PathBuf::from("/tmp/evman-test/events.json"));
        assert_eq!(evman.session_path(), PathBuf::from("/tmp/evman-test/session.json"));
    }

    #[test]
    fn tilde_is_expanded_in_data_path_only() {
        let evman = Evman::with_data_dir(PathBuf::from("~/.evman"));
        assert_eq!(evman.display_path(), PathBuf::from("~/.evman"));
        assert!(!evman.data_path().to_string_lossy().starts_with('~'));
    }
}
