use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DURATION_PRESETS: [u64; 4] = [15, 30, 60, 120];
pub const WORD_COUNT_PRESETS: [usize; 4] = [10, 25, 50, 100];

/// Words generated per second of a timed test.
pub const WORDS_PER_SECOND: usize = 3;

/// Longest accepted timed test.
pub const MAX_DURATION_SECS: u64 = 3600;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Time,
    Words,
    Zen,
}

impl Mode {
    pub fn next(self) -> Self {
        match self {
            Mode::Time => Mode::Words,
            Mode::Words => Mode::Zen,
            Mode::Zen => Mode::Time,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Time => "time",
            Mode::Words => "words",
            Mode::Zen => "zen",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the next test looks like: its mode and the target for that mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    pub mode: Mode,
    pub duration_secs: u64,
    pub word_count: usize,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Time,
            duration_secs: 30,
            word_count: 50,
        }
    }
}

fn step<T: Copy + PartialOrd>(presets: &[T], current: T, up: bool) -> T {
    let neighbour = if up {
        presets.iter().copied().find(|&p| p > current)
    } else {
        presets.iter().rev().copied().find(|&p| p < current)
    };
    neighbour.unwrap_or(current)
}

impl TypingConfig {
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    /// Moves the active target to the neighbouring preset. Returns false when
    /// nothing changed.
    pub fn adjust(&mut self, up: bool) -> bool {
        match self.mode {
            Mode::Time => {
                let next = step(&DURATION_PRESETS, self.duration_secs, up);
                let changed = next != self.duration_secs;
                self.duration_secs = next;
                changed
            }
            Mode::Words => {
                let next = step(&WORD_COUNT_PRESETS, self.word_count, up);
                let changed = next != self.word_count;
                self.word_count = next;
                changed
            }
            Mode::Zen => false,
        }
    }

    /// Number of random words to generate, or `None` for the whole list.
    pub fn words_needed(&self) -> Option<usize> {
        match self.mode {
            Mode::Time => {
                let secs = self.duration_secs.min(MAX_DURATION_SECS) as usize;
                Some(secs * WORDS_PER_SECOND)
            }
            Mode::Words => Some(self.word_count),
            Mode::Zen => None,
        }
    }

    pub fn label(&self) -> String {
        match self.mode {
            Mode::Time => format!("{} secs", self.duration_secs),
            Mode::Words => format!("{} words", self.word_count),
            Mode::Zen => "zen".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycles() {
        assert_eq!(Mode::Time.next(), Mode::Words);
        assert_eq!(Mode::Words.next(), Mode::Zen);
        assert_eq!(Mode::Zen.next(), Mode::Time);
    }

    #[test]
    fn test_adjust_duration_clamps() {
        let mut config = TypingConfig::default();
        assert!(config.adjust(true));
        assert_eq!(config.duration_secs, 60);
        assert!(config.adjust(true));
        assert!(!config.adjust(true));
        assert_eq!(config.duration_secs, 120);
        for _ in 0..5 {
            config.adjust(false);
        }
        assert_eq!(config.duration_secs, 15);
    }

    #[test]
    fn test_adjust_off_preset_value_snaps_to_neighbour() {
        let mut config = TypingConfig {
            mode: Mode::Words,
            duration_secs: 30,
            word_count: 40,
        };
        config.adjust(true);
        assert_eq!(config.word_count, 50);
        config.word_count = 40;
        config.adjust(false);
        assert_eq!(config.word_count, 25);
    }

    #[test]
    fn test_zen_ignores_adjust() {
        let mut config = TypingConfig {
            mode: Mode::Zen,
            ..TypingConfig::default()
        };
        assert!(!config.adjust(true));
        assert_eq!(config, TypingConfig { mode: Mode::Zen, ..TypingConfig::default() });
    }

    #[test]
    fn test_words_needed() {
        let mut config = TypingConfig::default();
        assert_eq!(config.words_needed(), Some(90));
        config.mode = Mode::Words;
        assert_eq!(config.words_needed(), Some(50));
        config.mode = Mode::Zen;
        assert_eq!(config.words_needed(), None);
    }

    #[test]
    fn test_huge_duration_is_capped() {
        let config = TypingConfig {
            duration_secs: u64::MAX,
            ..TypingConfig::default()
        };
        assert_eq!(
            config.words_needed(),
            Some(MAX_DURATION_SECS as usize * WORDS_PER_SECOND)
        );
    }

    #[test]
    fn test_labels() {
        let mut config = TypingConfig::default();
        assert_eq!(config.label(), "30 secs");
        config.mode = Mode::Words;
        assert_eq!(config.label(), "50 words");
    }
}
