use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::mode::{MAX_DURATION_SECS, Mode, TypingConfig};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u64,
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_word_list")]
    pub word_list: String,
}

fn default_duration_secs() -> u64 {
    30
}
fn default_word_count() -> usize {
    50
}
fn default_theme() -> String {
    "terminal".to_string()
}
fn default_word_list() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            duration_secs: default_duration_secs(),
            word_count: default_word_count(),
            theme: default_theme(),
            word_list: default_word_list(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(config.normalized())
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typr")
            .join("config.toml")
    }

    /// Zero targets would produce an empty test; fall back to defaults.
    fn normalized(mut self) -> Self {
        if self.duration_secs == 0 {
            self.duration_secs = default_duration_secs();
        }
        self.duration_secs = self.duration_secs.min(MAX_DURATION_SECS);
        if self.word_count == 0 {
            self.word_count = default_word_count();
        }
        self
    }

    pub fn typing_config(&self) -> TypingConfig {
        TypingConfig {
            mode: self.mode,
            duration_secs: self.duration_secs,
            word_count: self.word_count,
        }
    }
}
