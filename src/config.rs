use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::session::{Mode, DEFAULT_MINUTES, DEFAULT_ROUNDS};

/// Player preferences. Scores are never stored here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub default_minutes: u32,
    pub default_rounds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_minutes: DEFAULT_MINUTES,
            default_rounds: DEFAULT_ROUNDS,
        }
    }
}

impl Config {
    /// Prompt default for `mode`, clamped to the accepted range
    pub fn default_for(&self, mode: Mode) -> u32 {
        let range = mode.param_range();
        let stored = match mode {
            Mode::Timed => self.default_minutes,
            Mode::RoundLimited => self.default_rounds,
        };
        stored.clamp(*range.start(), *range.end())
    }

    pub fn remember(&mut self, mode: Mode, param: u32) {
        match mode {
            Mode::Timed => self.default_minutes = param,
            Mode::RoundLimited => self.default_rounds = param,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("roshambo_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}

/// Store that keeps nothing between runs
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryConfigStore;

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Config {
        Config::default()
    }

    fn save(&self, _cfg: &Config) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            default_minutes: 10,
            default_rounds: 21,
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn missing_or_malformed_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        assert_eq!(store.load(), Config::default());

        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "default_rounds": 9 }"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.default_rounds, 9);
        assert_eq!(cfg.default_minutes, DEFAULT_MINUTES);
    }

    #[test]
    fn default_for_clamps_out_of_range_values() {
        let cfg = Config {
            default_minutes: 0,
            default_rounds: 500,
        };
        assert_eq!(cfg.default_for(Mode::Timed), 1);
        assert_eq!(cfg.default_for(Mode::RoundLimited), 50);
    }

    #[test]
    fn remember_updates_the_matching_mode() {
        let mut cfg = Config::default();
        cfg.remember(Mode::Timed, 7);
        cfg.remember(Mode::RoundLimited, 12);
        assert_eq!(cfg.default_for(Mode::Timed), 7);
        assert_eq!(cfg.default_for(Mode::RoundLimited), 12);
    }
}
