use crate::app_dirs::AppDirs;
use crate::error::ConfigError;
use crate::keys::{Keymap, DEFAULT_LAYOUT_A, DEFAULT_LAYOUT_B};
use crate::problem::OperandRange;
use crate::session::{DuelSettings, DEFAULT_COOLDOWN_MS, DEFAULT_MAX_DIGITS, DEFAULT_WIN_MARGIN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_TICK_RATE_MS: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub win_margin: u32,
    pub max_input_digits: usize,
    pub cooldown_ms: u64,
    pub min_operand: u32,
    pub max_operand: u32,
    pub tick_rate_ms: u64,
    pub player_a_keys: String,
    pub player_b_keys: String,
}

impl Default for Config {
    fn default() -> Self {
        let operands = OperandRange::default();
        Self {
            win_margin: DEFAULT_WIN_MARGIN,
            max_input_digits: DEFAULT_MAX_DIGITS,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            min_operand: operands.min,
            max_operand: operands.max,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            player_a_keys: DEFAULT_LAYOUT_A.to_string(),
            player_b_keys: DEFAULT_LAYOUT_B.to_string(),
        }
    }
}

impl Config {
    /// Rules for the duel, checked for playability
    pub fn duel_settings(&self) -> Result<DuelSettings, ConfigError> {
        let settings = DuelSettings {
            win_margin: self.win_margin,
            max_digits: self.max_input_digits,
            cooldown: Duration::from_millis(self.cooldown_ms),
            operands: OperandRange::new(self.min_operand, self.max_operand),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn keymap(&self) -> Result<Keymap, ConfigError> {
        Keymap::new(&self.player_a_keys, &self.player_b_keys)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
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
        Self {
            path: AppDirs::config_path(),
        }
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
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => return cfg,
                Err(e) => log::warn!("ignoring malformed config {}: {e}", self.path.display()),
            },
            Err(e) => log::debug!("no config at {}: {e}", self.path.display()),
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
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
            win_margin: 5,
            max_input_digits: 2,
            cooldown_ms: 250,
            min_operand: 2,
            max_operand: 9,
            tick_rate_ms: 50,
            player_a_keys: "1234567890-=".into(),
            player_b_keys: "qwertyuiop[]".into(),
        };
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn missing_or_malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        assert_eq!(store.load(), Config::default());

        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "win_margin": 3 }"#).unwrap();
        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.win_margin, 3);
        assert_eq!(cfg.cooldown_ms, 500);
        assert_eq!(cfg.player_b_keys, DEFAULT_LAYOUT_B);
    }

    #[test]
    fn default_config_yields_default_settings() {
        let cfg = Config::default();
        assert_eq!(cfg.duel_settings(), Ok(DuelSettings::default()));
        assert_eq!(cfg.keymap(), Ok(Keymap::default()));
        assert_eq!(cfg.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = Config {
            max_operand: 600,
            ..Config::default()
        };
        assert_matches!(
            cfg.duel_settings(),
            Err(ConfigError::SumTooWide { sum: 1200, .. })
        );

        let cfg = Config {
            player_b_keys: DEFAULT_LAYOUT_A.into(),
            ..Config::default()
        };
        assert_matches!(cfg.keymap(), Err(ConfigError::LayoutOverlap { .. }));
    }
}
