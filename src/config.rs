//! Runtime settings, read from an optional TOML file.

use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use error::GameError;
use save::DEFAULT_SAVE_FILE;
use serde::Deserialize;

/// Track length when nothing else is configured.
pub const DEFAULT_MUSIC_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Where the game is saved and loaded from.
    pub save_file: PathBuf,
    /// Style terminal output. Defaults to on only when stdout is a terminal.
    pub color: bool,
    /// Tracing filter directive, e.g. `"info"` or `"save=debug"`.
    pub log_filter: Option<String>,
    pub music: MusicConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
            color: io::stdout().is_terminal(),
            log_filter: None,
            music: MusicConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Like [`GameConfig::from_path`], but an unreadable or invalid file
    /// yields the defaults along with the reason it was skipped.
    pub fn from_path_or_default(path: &Path) -> (Self, Option<anyhow::Error>) {
        match Self::from_path(path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        let cfg: GameConfig = toml::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.save_file.as_os_str().is_empty() {
            return Err(GameError::InvalidConfig("save_file must not be empty".to_string()));
        }
        Ok(())
    }

    /// Replace settings that fail validation with their defaults.
    pub fn sanitize(&mut self) -> Option<GameError> {
        let err = self.validate().err()?;
        self.save_file = PathBuf::from(DEFAULT_SAVE_FILE);
        Some(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MusicConfig {
    pub enabled: bool,
    pub duration_secs: u64,
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_secs: DEFAULT_MUSIC_SECS,
        }
    }
}

impl MusicConfig {
    /// Track length, or `None` when music is switched off.
    pub fn track(&self) -> Option<Duration> {
        (self.enabled && self.duration_secs > 0).then(|| Duration::from_secs(self.duration_secs))
    }
}
